//! Line-item status and refund operations.
//!
//! Both operations mutate a single line in place and leave the rest of the
//! order untouched. Neither validates transitions or amounts: operators can
//! move a line between any two statuses and refund any amount, matching how
//! the dashboard has always behaved.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use carvet_core::{ItemId, ItemStatus, Money, Order, OrderId, OrderItem, RefundStatus};

/// Errors from line-item operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemOpError {
    /// The order has no line with this id.
    #[error("order {order_id} has no item {item_id}")]
    ItemNotFound { order_id: OrderId, item_id: ItemId },
}

/// Replace the status of one line.
///
/// # Errors
///
/// Returns [`ItemOpError::ItemNotFound`] when `item_id` is not on the order.
pub fn update_item_status<'a>(
    order: &'a mut Order,
    item_id: &ItemId,
    new_status: ItemStatus,
) -> Result<&'a OrderItem, ItemOpError> {
    let order_id = order.id.clone();
    let item = order
        .item_mut(item_id)
        .ok_or_else(|| ItemOpError::ItemNotFound {
            order_id,
            item_id: item_id.clone(),
        })?;
    debug!(item = %item.id, from = %item.status, to = %new_status, "item status updated");
    item.status = new_status;
    Ok(item)
}

/// Refund one line for `amount`, in the line's own currency.
///
/// The refund is full when `amount` equals the line total and partial
/// otherwise, and the line status is forced to refunded either way. Amounts
/// above the line total or below zero are accepted as-is; reconciliation
/// happens downstream in accounting.
///
/// # Errors
///
/// Returns [`ItemOpError::ItemNotFound`] when `item_id` is not on the order.
pub fn refund_item<'a>(
    order: &'a mut Order,
    item_id: &ItemId,
    amount: Decimal,
) -> Result<&'a OrderItem, ItemOpError> {
    let order_id = order.id.clone();
    let item = order
        .item_mut(item_id)
        .ok_or_else(|| ItemOpError::ItemNotFound {
            order_id,
            item_id: item_id.clone(),
        })?;

    item.refund_status = if amount == item.total_price.amount {
        RefundStatus::Full
    } else {
        RefundStatus::Partial
    };
    item.refund_amount = Some(Money::new(amount, item.total_price.currency_code));
    item.status = ItemStatus::Refunded;
    debug!(item = %item.id, %amount, status = ?item.refund_status, "item refunded");
    Ok(item)
}
