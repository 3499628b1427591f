//! Type-safe money representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency amount as it appears on an order.
///
/// Amounts are stored in the currency's standard unit (korunas, not hellers)
/// because that is how values arrive from the order intake. Decimal
/// arithmetic avoids the float rounding that plagued the previous dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., korunas, not hellers).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new money value.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a whole-koruna amount, the common case for inspection pricing.
    #[must_use]
    pub fn czk(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::CZK)
    }

    /// True for discount lines and other negative amounts.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code.symbol())
    }
}

/// ISO 4217 currency codes accepted by the order intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    CZK,
    EUR,
    USD,
    GBP,
    PLN,
}

impl CurrencyCode {
    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::CZK => "CZK",
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
            Self::PLN => "PLN",
        }
    }

    /// Display symbol used in table cells.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::CZK => "Kč",
            Self::EUR => "€",
            Self::USD => "$",
            Self::GBP => "£",
            Self::PLN => "zł",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_czk_constructor() {
        let price = Money::czk(3990);
        assert_eq!(price.amount, Decimal::from(3990));
        assert_eq!(price.currency_code, CurrencyCode::CZK);
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(Money::czk(2990).to_string(), "2990 Kč");
        assert_eq!(
            Money::new(Decimal::new(1999, 2), CurrencyCode::EUR).to_string(),
            "19.99 €"
        );
    }

    #[test]
    fn test_is_negative() {
        assert!(Money::czk(-500).is_negative());
        assert!(!Money::czk(0).is_negative());
        assert!(!Money::czk(500).is_negative());
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Money::new(Decimal::new(100_050, 2), CurrencyCode::CZK);
        let json = serde_json::to_string(&price).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
