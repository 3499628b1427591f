//! The billable product catalog.
//!
//! A closed set: orders only ever carry lines for the three inspection
//! tiers, the travel surcharge, and discount vouchers. Display names come
//! from a static lookup so line naming cannot drift per record the way the
//! old dashboard's free-string product column did.

use serde::{Deserialize, Serialize};

/// Closed catalog of products that can appear as order lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCode {
    InspectionStandard,
    InspectionPremium,
    InspectionProfessional,
    /// Per-kilometer technician dispatch fee; amount varies per order.
    TravelSurcharge,
    /// Negative-total line applying a discount code.
    DiscountVoucher,
}

impl ProductCode {
    /// Display name shown on order lines.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::InspectionStandard => "Vehicle Inspection Standard",
            Self::InspectionPremium => "Vehicle Inspection Premium",
            Self::InspectionProfessional => "Vehicle Inspection Professional",
            Self::TravelSurcharge => "Technician Travel Surcharge",
            Self::DiscountVoucher => "Discount Voucher",
        }
    }

    /// Whole-koruna list price for fixed-price products.
    ///
    /// Surcharges and vouchers have per-order amounts and return `None`.
    #[must_use]
    pub const fn list_price_czk(self) -> Option<i64> {
        match self {
            Self::InspectionStandard => Some(2_990),
            Self::InspectionPremium => Some(3_990),
            Self::InspectionProfessional => Some(4_990),
            Self::TravelSurcharge | Self::DiscountVoucher => None,
        }
    }

    /// Every catalog entry.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::InspectionStandard,
            Self::InspectionPremium,
            Self::InspectionProfessional,
            Self::TravelSurcharge,
            Self::DiscountVoucher,
        ]
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_unique() {
        let names: Vec<&str> = ProductCode::all()
            .iter()
            .map(|p| p.display_name())
            .collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_inspection_tiers_have_list_prices() {
        assert_eq!(ProductCode::InspectionStandard.list_price_czk(), Some(2_990));
        assert_eq!(ProductCode::InspectionPremium.list_price_czk(), Some(3_990));
        assert_eq!(
            ProductCode::InspectionProfessional.list_price_czk(),
            Some(4_990)
        );
        assert_eq!(ProductCode::TravelSurcharge.list_price_czk(), None);
        assert_eq!(ProductCode::DiscountVoucher.list_price_czk(), None);
    }
}
