//! Integration tests for order mutations.
//!
//! Covers line-item status changes and refunds, the order-level audit
//! trails they sit next to, and inline edits gated by the column layout.
//!
//! Run with: cargo test -p carvet-integration-tests

use rust_decimal::Decimal;

use carvet_core::{
    Column, FieldKey, ItemId, ItemStatus, Money, OrderStatus, ProductCode, RefundStatus,
};
use carvet_crm::{EditError, ItemOpError, apply_edit, refund_item, update_item_status};
use carvet_integration_tests::{complete_order, waiting_order};

// ============================================================================
// Item operations
// ============================================================================

#[test]
fn test_full_refund_of_a_line() {
    let mut order = complete_order();
    let item_id = ItemId::new("ORD001-1");

    let item = refund_item(&mut order, &item_id, Decimal::from(3_990)).expect("line exists");
    assert_eq!(item.refund_status, RefundStatus::Full);
    assert_eq!(item.status, ItemStatus::Refunded);
    assert_eq!(item.refund_amount, Some(Money::czk(3_990)));
    assert_eq!(order.refunded_total(), Decimal::from(3_990));
}

#[test]
fn test_partial_refund_of_a_line() {
    let mut order = complete_order();
    let item_id = ItemId::new("ORD001-1");

    let item = refund_item(&mut order, &item_id, Decimal::from(1_500)).expect("line exists");
    assert_eq!(item.refund_status, RefundStatus::Partial);
    assert_eq!(order.refunded_total(), Decimal::from(1_500));
    // The billed line total is untouched; only the refund fields move.
    assert_eq!(order.items_total(), Decimal::from(3_990));
}

#[test]
fn test_item_status_moves_freely() {
    let mut order = waiting_order();
    let item_id = ItemId::new("ORD002-1");

    update_item_status(&mut order, &item_id, ItemStatus::Completed).expect("line exists");
    update_item_status(&mut order, &item_id, ItemStatus::Cancelled).expect("line exists");
    let item = update_item_status(&mut order, &item_id, ItemStatus::Pending).expect("line exists");
    assert_eq!(item.status, ItemStatus::Pending);
}

#[test]
fn test_unknown_line_is_an_error() {
    let mut order = waiting_order();
    let missing = ItemId::new("ORD002-9");

    let err = refund_item(&mut order, &missing, Decimal::from(100)).expect_err("no such line");
    assert_eq!(
        err,
        ItemOpError::ItemNotFound {
            order_id: order.id.clone(),
            item_id: missing,
        }
    );
}

// ============================================================================
// Audit trails
// ============================================================================

#[test]
fn test_status_history_is_append_only_and_ordered() {
    let mut order = waiting_order();
    assert!(order.status_history.is_empty());

    order.record_status(OrderStatus::TechnicianEnRoute, None);
    order.record_status(OrderStatus::InspectionInProgress, Some("arrived".to_owned()));
    order.record_status(OrderStatus::Completed, None);

    let states: Vec<OrderStatus> = order.status_history.iter().map(|c| c.status).collect();
    assert_eq!(
        states,
        vec![
            OrderStatus::TechnicianEnRoute,
            OrderStatus::InspectionInProgress,
            OrderStatus::Completed,
        ]
    );
    assert_eq!(order.order_status, OrderStatus::Completed);
    assert!(
        order
            .status_history
            .windows(2)
            .all(|w| w[0].changed_at <= w[1].changed_at)
    );
}

#[test]
fn test_internal_notes_accumulate() {
    let mut order = waiting_order();
    order.add_internal_note("anna", "customer prefers afternoon");
    order.add_internal_note("marek", "gate code 1234");

    let authors: Vec<&str> = order
        .internal_note_history
        .iter()
        .map(|n| n.author.as_str())
        .collect();
    assert_eq!(authors, vec!["anna", "marek"]);
}

// ============================================================================
// Gated inline edits
// ============================================================================

#[test]
fn test_edits_flow_through_the_default_layout() {
    let mut order = waiting_order();
    let columns = Column::defaults();

    apply_edit(&mut order, &columns, FieldKey::Phone, "+420601000111").expect("phone is editable");
    apply_edit(&mut order, &columns, FieldKey::Model, "Passat").expect("model is editable");
    assert_eq!(order.phone, "+420601000111");
    assert_eq!(order.model.as_deref(), Some("Passat"));
}

#[test]
fn test_layout_blocks_what_it_does_not_mark_editable() {
    let mut order = waiting_order();
    let columns = Column::defaults();

    let err = apply_edit(&mut order, &columns, FieldKey::OrderDate, "2024-03-01")
        .expect_err("order date is not editable");
    assert_eq!(err, EditError::NotEditable(FieldKey::OrderDate));
}

#[test]
fn test_refund_then_edit_keeps_both_changes() {
    let mut order = complete_order();
    let columns = Column::defaults();
    let item_id = ItemId::new("ORD001-1");

    refund_item(&mut order, &item_id, Decimal::from(3_990)).expect("line exists");
    apply_edit(&mut order, &columns, FieldKey::InternalNote, "refund wired 2024-02-01")
        .expect("internal note is editable");

    let item = order.item(&item_id).expect("line exists");
    assert_eq!(item.refund_status, RefundStatus::Full);
    assert_eq!(item.product_code, ProductCode::InspectionPremium);
    assert_eq!(
        order.internal_note.as_deref(),
        Some("refund wired 2024-02-01")
    );
}
