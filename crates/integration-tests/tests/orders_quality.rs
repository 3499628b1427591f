//! Integration tests for the data-quality evaluator.
//!
//! Walks whole fixture books through the evaluator the way `carvet check`
//! does, covering severity thresholds, both policies, and the flagged-order
//! sink.
//!
//! Run with: cargo test -p carvet-integration-tests

use rust_decimal::Decimal;

use carvet_core::{CurrencyCode, ItemId, Money, OrderId, OrderItem, ProductCode};
use carvet_crm::{Evaluator, QualityIssue, Severity, SeverityPolicy};
use carvet_integration_tests::{complete_order, order_book, undocumented_order, waiting_order};

// ============================================================================
// Severity tiers
// ============================================================================

#[test]
fn test_clean_orders_are_synchronized() {
    let evaluator = Evaluator::new();
    for order in [complete_order(), waiting_order()] {
        let report = evaluator.evaluate(&order);
        assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
        assert_eq!(report.severity, Severity::Synchronized);
        assert_eq!(report.message, "Synchronized");
    }
}

#[test]
fn test_single_issue_is_a_warning() {
    let report = Evaluator::new().evaluate(&undocumented_order());
    assert_eq!(report.issues, vec![QualityIssue::MissingDocumentNumber]);
    assert_eq!(report.severity, Severity::Warning);
    assert_eq!(report.message, "1 issue(s)");
}

#[test]
fn test_three_issues_escalate_to_error() {
    let mut order = complete_order();
    order.email = String::new();
    order.phone = "12345".to_owned();
    order.vin = Some("SHORT".to_owned());

    let report = Evaluator::new().evaluate(&order);
    assert_eq!(
        report.issues,
        vec![
            QualityIssue::InvalidEmail,
            QualityIssue::InvalidPhone,
            QualityIssue::InvalidVin,
        ]
    );
    assert_eq!(report.severity, Severity::Error);
    assert_eq!(report.message, "3 issues");
}

#[test]
fn test_binary_policy_knows_only_clean_and_error() {
    let evaluator = Evaluator::with_policy(SeverityPolicy::Binary);

    let report = evaluator.evaluate(&waiting_order());
    assert_eq!(report.severity, Severity::Synchronized);

    let report = evaluator.evaluate(&undocumented_order());
    assert_eq!(report.severity, Severity::Error);
    assert_eq!(report.message, "1 issues");
}

// ============================================================================
// Book-level sweeps
// ============================================================================

#[test]
fn test_sink_collects_exactly_the_flagged_orders() {
    let orders = order_book();
    let evaluator = Evaluator::new();

    let mut flagged: Vec<OrderId> = Vec::new();
    for order in &orders {
        evaluator.evaluate_with(order, |order, _| flagged.push(order.id.clone()));
    }
    assert_eq!(flagged, vec![OrderId::new("ORD003")]);
}

#[test]
fn test_reports_are_deterministic() {
    let orders = order_book();
    let evaluator = Evaluator::new();

    let first: Vec<_> = orders.iter().map(|o| evaluator.evaluate(o)).collect();
    let second: Vec<_> = orders.iter().map(|o| evaluator.evaluate(o)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_repairing_a_record_clears_the_flag() {
    let mut order = undocumented_order();
    let evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate(&order).severity, Severity::Warning);

    order.document_number = Some("FV-2024-0201".to_owned());
    let report = evaluator.evaluate(&order);
    assert!(report.is_clean());
    assert_eq!(report.message, "Synchronized");
}

#[test]
fn test_price_tolerance_allows_one_currency_unit() {
    let mut order = waiting_order();

    // 3990 billed vs 3990.5 on the order is inside the tolerance.
    order.order_value = Money::new(Decimal::new(39_905, 1), CurrencyCode::CZK);
    assert!(Evaluator::new().evaluate(&order).is_clean());

    // 1500 vs 1000 is not.
    order.order_value = Money::czk(1_500);
    order.items[0] = OrderItem::new(
        ItemId::new("ORD002-1"),
        ProductCode::InspectionStandard,
        1,
        Money::czk(1_000),
    );
    let report = Evaluator::new().evaluate(&order);
    assert_eq!(report.issues, vec![QualityIssue::PriceMismatch]);
}
