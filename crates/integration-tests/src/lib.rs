//! Shared fixtures for the CarVet integration tests.
//!
//! Everything runs in-process against plain values; there is no server or
//! database to start. The fixture book mirrors the orders the dashboard
//! team uses for manual testing, so ids and values here match the ones in
//! bug reports.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p carvet-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `orders_filtering` - Search, date-range, and column-filter semantics
//! - `orders_quality` - The sync-status rule set and severity policies
//! - `order_mutations` - Item operations and gated inline edits

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, TimeZone, Utc};

use carvet_core::{
    ItemId, Money, Order, OrderId, OrderItem, OrderStatus, PaymentStatus, ProductCode,
};

/// A fully valid, completed order. Passes every quality rule.
#[must_use]
pub fn complete_order() -> Order {
    let placed = at(2024, 1, 15, 10, 30);
    let mut order = Order::new(OrderId::new("ORD001"), Money::czk(3_990), placed);
    order.first_name = "Jan".to_owned();
    order.last_name = "Novák".to_owned();
    order.email = "jan.novak@seznam.cz".to_owned();
    order.phone = "+420601234567".to_owned();
    order.address = "Dlouhá 12".to_owned();
    order.postal_code = "110 00".to_owned();
    order.city = "Praha".to_owned();
    order.manufacturer = Some("Škoda".to_owned());
    order.model = Some("Octavia".to_owned());
    order.vin = Some("TMBJJ7NE3L0012345".to_owned());
    order.payment_status = PaymentStatus::Paid;
    order.document_number = Some("FV-2024-0117".to_owned());
    order.report_url = Some("https://reports.carvet.cz/ORD001".to_owned());
    order.items.push(OrderItem::new(
        ItemId::new("ORD001-1"),
        ProductCode::InspectionPremium,
        1,
        Money::czk(3_990),
    ));
    order.record_status(OrderStatus::Completed, None);
    order
}

/// A fresh, unpaid order waiting for a technician. Also clean.
#[must_use]
pub fn waiting_order() -> Order {
    let placed = at(2024, 1, 20, 9, 0);
    let mut order = Order::new(OrderId::new("ORD002"), Money::czk(3_990), placed);
    order.first_name = "Petra".to_owned();
    order.last_name = "Svobodová".to_owned();
    order.email = "petra.svobodova@gmail.com".to_owned();
    order.phone = "+420722334455".to_owned();
    order.address = "Nádražní 7".to_owned();
    order.postal_code = "602 00".to_owned();
    order.city = "Brno".to_owned();
    order.manufacturer = Some("Volkswagen".to_owned());
    order.model = Some("Golf".to_owned());
    order.vin = Some("WVWZZZ1KZAW001234".to_owned());
    order.items.push(OrderItem::new(
        ItemId::new("ORD002-1"),
        ProductCode::InspectionPremium,
        1,
        Money::czk(3_990),
    ));
    order
}

/// A paid order mid-inspection with its invoice number still missing.
/// Exactly one quality issue.
#[must_use]
pub fn undocumented_order() -> Order {
    let placed = at(2024, 2, 3, 14, 0);
    let mut order = Order::new(OrderId::new("ORD003"), Money::czk(4_990), placed);
    order.first_name = "Martin".to_owned();
    order.last_name = "Procházka".to_owned();
    order.email = "martin.prochazka@email.cz".to_owned();
    order.phone = "+420603998877".to_owned();
    order.address = "Hlavní 31".to_owned();
    order.postal_code = "702 00".to_owned();
    order.city = "Ostrava".to_owned();
    order.manufacturer = Some("BMW".to_owned());
    order.model = Some("320d".to_owned());
    order.vin = Some("WBA8E9C50GK646337".to_owned());
    order.payment_status = PaymentStatus::Paid;
    order.items.push(OrderItem::new(
        ItemId::new("ORD003-1"),
        ProductCode::InspectionProfessional,
        1,
        Money::czk(4_990),
    ));
    order.record_status(OrderStatus::TechnicianEnRoute, None);
    order.record_status(OrderStatus::InspectionInProgress, None);
    order
}

/// Carries the searchable marker VIN while keeping the VIN column hidden
/// in the default layout.
#[must_use]
pub fn marker_vin_order() -> Order {
    let placed = at(2024, 2, 20, 16, 45);
    let mut order = Order::new(OrderId::new("ORD004"), Money::czk(2_990), placed);
    order.first_name = "Lucie".to_owned();
    order.last_name = "Dvořáková".to_owned();
    order.email = "lucie.dvorakova@centrum.cz".to_owned();
    order.phone = "+420777112233".to_owned();
    order.address = "Polní 3".to_owned();
    order.postal_code = "602 00".to_owned();
    order.city = "Brno".to_owned();
    order.manufacturer = Some("Toyota".to_owned());
    order.model = Some("Corolla".to_owned());
    order.vin = Some("ZZZTESTVIN123".to_owned());
    order.items.push(OrderItem::new(
        ItemId::new("ORD004-1"),
        ProductCode::InspectionStandard,
        1,
        Money::czk(2_990),
    ));
    order
}

/// The standard four-order fixture book, in insertion order.
#[must_use]
pub fn order_book() -> Vec<Order> {
    vec![
        complete_order(),
        waiting_order(),
        undocumented_order(),
        marker_vin_order(),
    ]
}

/// Ids of the given rows, for compact assertions.
#[must_use]
pub fn ids(rows: &[&Order]) -> Vec<String> {
    rows.iter().map(|o| o.id.as_str().to_owned()).collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}
