//! Status enums for the order workflow.
//!
//! Upstream revisions of the dashboard drifted on the exact variant sets
//! (and mixed Czech/English labels for the same state). Each axis here is
//! the ONE canonical closed set; legacy values are normalized at the
//! data-ingestion boundary, which is outside this workspace.

use serde::{Deserialize, Serialize};

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
    PartiallyPaid,
    Refunded,
    PartiallyRefunded,
}

impl PaymentStatus {
    /// Semantic badge tone for table cells.
    #[must_use]
    pub const fn badge_tone(self) -> BadgeTone {
        match self {
            Self::Paid => BadgeTone::Default,
            Self::Unpaid => BadgeTone::Destructive,
            Self::PartiallyPaid => BadgeTone::Secondary,
            Self::Refunded | Self::PartiallyRefunded => BadgeTone::Outline,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Unpaid => write!(f, "Unpaid"),
            Self::PartiallyPaid => write!(f, "Partially paid"),
            Self::Refunded => write!(f, "Refunded"),
            Self::PartiallyRefunded => write!(f, "Partially refunded"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            "partially_paid" => Ok(Self::PartiallyPaid),
            "refunded" => Ok(Self::Refunded),
            "partially_refunded" => Ok(Self::PartiallyRefunded),
            _ => Err(format!("invalid payment status: {s}")),
        }
    }
}

/// Workflow state of an order.
///
/// `Completed` is the sole terminal-success state; `Refunded` and the two
/// `VehicleUnavailable` variants are terminal failures. Transitions are NOT
/// validated anywhere - any state may follow any state. That is a known gap
/// inherited from the dashboard, kept so stored data matches what staff
/// actually produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Assigned,
    TechnicianEnRoute,
    InspectionInProgress,
    Completed,
    /// Advertised vehicle already sold or withdrawn; fee returnable.
    VehicleUnavailableReturnable,
    /// Advertised vehicle unavailable after the technician was dispatched.
    VehicleUnavailableNonReturnable,
    Refunded,
}

impl OrderStatus {
    /// The sole terminal-success state.
    #[must_use]
    pub const fn is_terminal_success(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Terminal states that end the workflow without a delivered report.
    #[must_use]
    pub const fn is_terminal_failure(self) -> bool {
        matches!(
            self,
            Self::Refunded
                | Self::VehicleUnavailableReturnable
                | Self::VehicleUnavailableNonReturnable
        )
    }

    /// Whether the workflow has ended, successfully or not.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.is_terminal_success() || self.is_terminal_failure()
    }

    /// Coarse workflow progress for the order-detail view.
    #[must_use]
    pub const fn progress_percent(self) -> u8 {
        match self {
            Self::Assigned => 10,
            Self::TechnicianEnRoute => 25,
            Self::InspectionInProgress => 60,
            Self::Completed => 100,
            Self::VehicleUnavailableReturnable
            | Self::VehicleUnavailableNonReturnable
            | Self::Refunded => 0,
        }
    }

    /// Semantic badge tone for table cells.
    #[must_use]
    pub const fn badge_tone(self) -> BadgeTone {
        match self {
            Self::Completed => BadgeTone::Default,
            Self::Assigned | Self::TechnicianEnRoute | Self::InspectionInProgress => {
                BadgeTone::Secondary
            }
            Self::VehicleUnavailableReturnable
            | Self::VehicleUnavailableNonReturnable
            | Self::Refunded => BadgeTone::Destructive,
        }
    }

    /// Every workflow state, in workflow order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Assigned,
            Self::TechnicianEnRoute,
            Self::InspectionInProgress,
            Self::Completed,
            Self::VehicleUnavailableReturnable,
            Self::VehicleUnavailableNonReturnable,
            Self::Refunded,
        ]
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assigned => write!(f, "Assigned"),
            Self::TechnicianEnRoute => write!(f, "Technician en route"),
            Self::InspectionInProgress => write!(f, "Inspection in progress"),
            Self::Completed => write!(f, "Completed"),
            Self::VehicleUnavailableReturnable => write!(f, "Vehicle unavailable (returnable)"),
            Self::VehicleUnavailableNonReturnable => {
                write!(f, "Vehicle unavailable (non-returnable)")
            }
            Self::Refunded => write!(f, "Refunded"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(Self::Assigned),
            "technician_en_route" => Ok(Self::TechnicianEnRoute),
            "inspection_in_progress" => Ok(Self::InspectionInProgress),
            "completed" => Ok(Self::Completed),
            "vehicle_unavailable_returnable" => Ok(Self::VehicleUnavailableReturnable),
            "vehicle_unavailable_non_returnable" => Ok(Self::VehicleUnavailableNonReturnable),
            "refunded" => Ok(Self::Refunded),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Fulfillment state of a single order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Refunded,
    Cancelled,
}

impl ItemStatus {
    /// Semantic badge tone for table cells.
    #[must_use]
    pub const fn badge_tone(self) -> BadgeTone {
        match self {
            Self::Completed => BadgeTone::Default,
            Self::Pending | Self::InProgress => BadgeTone::Secondary,
            Self::Cancelled => BadgeTone::Destructive,
            Self::Refunded => BadgeTone::Outline,
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::InProgress => write!(f, "In progress"),
            Self::Completed => write!(f, "Completed"),
            Self::Refunded => write!(f, "Refunded"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "refunded" => Ok(Self::Refunded),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid item status: {s}")),
        }
    }
}

/// Refund state of a single order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    #[default]
    None,
    Partial,
    Full,
}

impl std::fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Partial => write!(f, "Partial"),
            Self::Full => write!(f, "Full"),
        }
    }
}

/// Semantic display tone for a status badge.
///
/// Presentation layers map tones to their own visual treatment; the core
/// never deals in colors or CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Default,
    Secondary,
    Destructive,
    Outline,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_is_sole_terminal_success() {
        for status in OrderStatus::all() {
            assert_eq!(
                status.is_terminal_success(),
                status == OrderStatus::Completed
            );
        }
    }

    #[test]
    fn test_terminal_failure_states() {
        assert!(OrderStatus::Refunded.is_terminal_failure());
        assert!(OrderStatus::VehicleUnavailableReturnable.is_terminal_failure());
        assert!(OrderStatus::VehicleUnavailableNonReturnable.is_terminal_failure());
        assert!(!OrderStatus::InspectionInProgress.is_terminal_failure());
        assert!(!OrderStatus::Completed.is_terminal_failure());
    }

    #[test]
    fn test_progress_percent_monotonic_over_happy_path() {
        let happy_path = [
            OrderStatus::Assigned,
            OrderStatus::TechnicianEnRoute,
            OrderStatus::InspectionInProgress,
            OrderStatus::Completed,
        ];
        let percents: Vec<u8> = happy_path
            .iter()
            .map(|s| s.progress_percent())
            .collect();
        assert!(percents.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(OrderStatus::Completed.progress_percent(), 100);
        assert_eq!(OrderStatus::Refunded.progress_percent(), 0);
    }

    #[test]
    fn test_order_status_parse_round_trip() {
        for status in OrderStatus::all() {
            let token = serde_json::to_string(&status).unwrap();
            let parsed: OrderStatus = serde_json::from_str(&token).unwrap();
            assert_eq!(parsed, status);
        }
        assert_eq!(
            "technician_en_route".parse::<OrderStatus>().unwrap(),
            OrderStatus::TechnicianEnRoute
        );
        assert!("delivering".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_payment_status_parse_and_display() {
        assert_eq!(
            "partially_paid".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::PartiallyPaid
        );
        assert_eq!(PaymentStatus::PartiallyPaid.to_string(), "Partially paid");
        assert!("paid_in_full".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_badge_tones() {
        assert_eq!(PaymentStatus::Paid.badge_tone(), BadgeTone::Default);
        assert_eq!(PaymentStatus::Unpaid.badge_tone(), BadgeTone::Destructive);
        assert_eq!(OrderStatus::Completed.badge_tone(), BadgeTone::Default);
        assert_eq!(
            OrderStatus::TechnicianEnRoute.badge_tone(),
            BadgeTone::Secondary
        );
        assert_eq!(ItemStatus::Refunded.badge_tone(), BadgeTone::Outline);
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::TechnicianEnRoute).unwrap(),
            r#""TECHNICIAN_EN_ROUTE""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::PartiallyRefunded).unwrap(),
            r#""PARTIALLY_REFUNDED""#
        );
    }
}
