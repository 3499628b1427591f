//! The order aggregate: customer, vehicle, line items, and audit history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ItemId, OrderId};
use super::money::Money;
use super::product::ProductCode;
use super::status::{ItemStatus, OrderStatus, PaymentStatus, RefundStatus};

// =============================================================================
// Order
// =============================================================================

/// One customer transaction: an inspection of an advertised vehicle.
///
/// The model is permissive on purpose. Contact fields are plain strings
/// (empty means "not provided"), vehicle fields are optional, and nothing
/// here enforces that item totals reconcile with `order_value`. Records with
/// gaps are real and must stay representable; the quality evaluator flags
/// them, the model never rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique, immutable key (e.g., `ORD001`).
    pub id: OrderId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Free-text customer address as entered at intake.
    pub address: String,
    pub postal_code: String,
    pub city: String,
    /// Total the customer was quoted. Item totals are expected to sum to
    /// this within 1 currency unit; drift is a quality issue, not an error.
    pub order_value: Money,
    pub order_date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
    /// Rough location from the classified ad (district, not a full address).
    #[serde(default)]
    pub listing_address: Option<String>,
    #[serde(default)]
    pub listing_url: Option<String>,
    /// Link to the delivered inspection report. Required once `Completed`.
    #[serde(default)]
    pub report_url: Option<String>,
    /// Payment reference; required once the order is paid.
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub discount_code: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub customer_note: Option<String>,
    #[serde(default)]
    pub internal_note: Option<String>,
    /// Billable lines, insertion order preserved.
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Append-only workflow audit trail.
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
    /// Append-only internal-annotation audit trail.
    #[serde(default)]
    pub internal_note_history: Vec<InternalNote>,
}

impl Order {
    /// Create an order with the mandatory fields; everything else starts
    /// empty or absent.
    #[must_use]
    pub fn new(id: impl Into<OrderId>, order_value: Money, order_date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            postal_code: String::new(),
            city: String::new(),
            order_value,
            order_date,
            payment_status: PaymentStatus::default(),
            order_status: OrderStatus::default(),
            manufacturer: None,
            model: None,
            vin: None,
            listing_address: None,
            listing_url: None,
            report_url: None,
            document_number: None,
            discount_code: None,
            tax_id: None,
            company_id: None,
            street_address: None,
            customer_note: None,
            internal_note: None,
            items: Vec::new(),
            status_history: Vec::new(),
            internal_note_history: Vec::new(),
        }
    }

    /// Sum of line totals, computed on read.
    ///
    /// Never stored: the dashboard displays aggregates live so a stale copy
    /// can't contradict the lines.
    #[must_use]
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(|item| item.total_price.amount).sum()
    }

    /// Sum of refunded amounts across lines, computed on read.
    #[must_use]
    pub fn refunded_total(&self) -> Decimal {
        self.items
            .iter()
            .filter(|item| item.refund_status != RefundStatus::None)
            .filter_map(|item| item.refund_amount.map(|refund| refund.amount))
            .sum()
    }

    /// Look up a line by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Look up a line by id, mutably.
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    /// Move the workflow to `status` and append a `StatusChange` to the
    /// audit trail.
    ///
    /// Transitions are not validated: any state may follow any state.
    pub fn record_status(&mut self, status: OrderStatus, note: Option<String>) {
        self.status_history.push(StatusChange {
            status,
            changed_at: Utc::now(),
            note,
        });
        self.order_status = status;
    }

    /// Append an internal annotation to the audit trail.
    ///
    /// The trail is append-only; there is no removal API.
    pub fn add_internal_note(&mut self, author: impl Into<String>, text: impl Into<String>) {
        self.internal_note_history.push(InternalNote {
            author: author.into(),
            noted_at: Utc::now(),
            text: text.into(),
        });
    }
}

// =============================================================================
// OrderItem
// =============================================================================

/// One billable line within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique within the parent order.
    pub id: ItemId,
    pub product_code: ProductCode,
    /// Display name, derived from the catalog at construction.
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// Line total; negative for discount lines.
    pub total_price: Money,
    pub status: ItemStatus,
    pub refund_status: RefundStatus,
    /// Present iff `refund_status` is not `None`.
    #[serde(default)]
    pub refund_amount: Option<Money>,
    #[serde(default)]
    pub note: Option<String>,
}

impl OrderItem {
    /// Create a line for `quantity` units of a catalog product.
    ///
    /// The line total is `quantity * unit_price` and the display name comes
    /// from the static catalog lookup.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        product_code: ProductCode,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        let total = unit_price.amount * Decimal::from(quantity);
        Self {
            id: id.into(),
            product_code,
            product_name: product_code.display_name().to_owned(),
            quantity,
            unit_price,
            total_price: Money::new(total, unit_price.currency_code),
            status: ItemStatus::default(),
            refund_status: RefundStatus::default(),
            refund_amount: None,
            note: None,
        }
    }
}

// =============================================================================
// Audit trail entries
// =============================================================================

/// One entry in the order's workflow audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub changed_at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

/// One entry in the order's internal-annotation audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalNote {
    pub author: String,
    pub noted_at: DateTime<Utc>,
    pub text: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_items_total_includes_negative_lines() {
        let mut order = Order::new("ORD001", Money::czk(2_490), order_date());
        order.items.push(OrderItem::new(
            "ORD001-1",
            ProductCode::InspectionStandard,
            1,
            Money::czk(2_990),
        ));
        order.items.push(OrderItem::new(
            "ORD001-2",
            ProductCode::DiscountVoucher,
            1,
            Money::czk(-500),
        ));

        assert_eq!(order.items_total(), Decimal::from(2_490));
    }

    #[test]
    fn test_refunded_total_counts_only_refunded_lines() {
        let mut order = Order::new("ORD002", Money::czk(5_980), order_date());
        let mut refunded = OrderItem::new(
            "ORD002-1",
            ProductCode::InspectionStandard,
            1,
            Money::czk(2_990),
        );
        refunded.refund_status = RefundStatus::Full;
        refunded.refund_amount = Some(Money::czk(2_990));
        order.items.push(refunded);
        order.items.push(OrderItem::new(
            "ORD002-2",
            ProductCode::InspectionStandard,
            1,
            Money::czk(2_990),
        ));

        assert_eq!(order.refunded_total(), Decimal::from(2_990));
    }

    #[test]
    fn test_record_status_appends_history() {
        let mut order = Order::new("ORD003", Money::czk(2_990), order_date());
        assert!(order.status_history.is_empty());

        order.record_status(OrderStatus::TechnicianEnRoute, None);
        order.record_status(OrderStatus::Completed, Some("report sent".to_owned()));

        assert_eq!(order.order_status, OrderStatus::Completed);
        assert_eq!(order.status_history.len(), 2);
        let first = order.status_history.first().unwrap();
        assert_eq!(first.status, OrderStatus::TechnicianEnRoute);
        let last = order.status_history.last().unwrap();
        assert_eq!(last.note.as_deref(), Some("report sent"));
    }

    #[test]
    fn test_record_status_allows_any_transition() {
        // Deliberately permissive: terminal states are not sticky.
        let mut order = Order::new("ORD004", Money::czk(2_990), order_date());
        order.record_status(OrderStatus::Completed, None);
        order.record_status(OrderStatus::Assigned, None);
        assert_eq!(order.order_status, OrderStatus::Assigned);
        assert_eq!(order.status_history.len(), 2);
    }

    #[test]
    fn test_add_internal_note_appends() {
        let mut order = Order::new("ORD005", Money::czk(2_990), order_date());
        order.add_internal_note("petra", "customer prefers afternoon calls");
        order.add_internal_note("mirek", "VIN double-checked against listing");

        assert_eq!(order.internal_note_history.len(), 2);
        let first = order.internal_note_history.first().unwrap();
        assert_eq!(first.author, "petra");
        assert_eq!(first.text, "customer prefers afternoon calls");
    }

    #[test]
    fn test_item_lookup() {
        let mut order = Order::new("ORD006", Money::czk(2_990), order_date());
        order.items.push(OrderItem::new(
            "ORD006-1",
            ProductCode::InspectionPremium,
            1,
            Money::czk(3_990),
        ));

        assert!(order.item(&ItemId::new("ORD006-1")).is_some());
        assert!(order.item(&ItemId::new("ORD006-9")).is_none());
    }

    #[test]
    fn test_item_new_derives_name_and_total() {
        let item = OrderItem::new(
            "X-1",
            ProductCode::InspectionProfessional,
            2,
            Money::czk(4_990),
        );
        assert_eq!(item.product_name, "Vehicle Inspection Professional");
        assert_eq!(item.total_price.amount, Decimal::from(9_980));
        assert_eq!(item.status, ItemStatus::Pending);
        assert_eq!(item.refund_status, RefundStatus::None);
        assert!(item.refund_amount.is_none());
    }

    #[test]
    fn test_order_serde_round_trip() {
        let mut order = Order::new("ORD007", Money::czk(2_990), order_date());
        order.first_name = "Jan".to_owned();
        order.last_name = "Novák".to_owned();
        order.email = "jan.novak@example.cz".to_owned();
        order.vin = Some("TMBJJ7NE3E0123456".to_owned());
        order.items.push(OrderItem::new(
            "ORD007-1",
            ProductCode::InspectionStandard,
            1,
            Money::czk(2_990),
        ));
        order.record_status(OrderStatus::InspectionInProgress, None);
        order.add_internal_note("petra", "seller reachable only via chat");

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
