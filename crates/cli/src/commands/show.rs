//! Show one order in detail.
//!
//! # Usage
//!
//! ```bash
//! carvet show ORD0007
//! ```
//!
//! Prints every populated field, the line items with their refund state,
//! the workflow audit trail, internal notes, and the quality verdict.
//!
//! # Environment Variables
//!
//! - `CARVET_DATA` - Path of the order book JSON file (`--data` overrides)
//! - `CARVET_SEVERITY_POLICY` - Severity policy for the verdict line

use std::fmt::Write as _;
use std::path::PathBuf;

use carvet_core::{FieldKey, Order};
use carvet_crm::Evaluator;

use crate::config::CliConfig;
use crate::data;

/// Render the detail view for `order_id`.
///
/// # Errors
///
/// Returns an error when the data file cannot be loaded or the order does
/// not exist.
pub fn run(order_id: &str, data: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_data_path(data);
    let orders = data::load_orders(&config.data_path)?;

    let order = orders
        .iter()
        .find(|order| order.id.as_str() == order_id)
        .ok_or_else(|| format!("Order not found: {order_id}"))?;

    let evaluator = Evaluator::with_policy(config.severity_policy);
    let detail = render_detail(order, &evaluator);

    #[allow(clippy::print_stdout)]
    {
        println!("{detail}");
    }
    Ok(())
}

fn render_detail(order: &Order, evaluator: &Evaluator) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Order {}", order.id);
    let _ = writeln!(
        out,
        "{} ({}% complete)",
        order.order_status,
        order.order_status.progress_percent()
    );

    let report = evaluator.evaluate(order);
    let _ = writeln!(out, "Sync: {}", report.message);
    for issue in &report.issues {
        let _ = writeln!(out, "  - {issue}");
    }
    out.push('\n');

    // Populated fields only; the synthetic indicator is covered above.
    for key in FieldKey::ALL {
        if key == FieldKey::OrderId || key == FieldKey::StatusIndicator {
            continue;
        }
        if let Some(value) = key.display_value(order)
            && !value.is_empty()
        {
            let _ = writeln!(out, "{:<16} {value}", key.label());
        }
    }

    if !order.items.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Items:");
        for item in &order.items {
            let _ = write!(
                out,
                "  {} x{} {} [{}]",
                item.product_name, item.quantity, item.total_price, item.status
            );
            match item.refund_amount {
                Some(refund) => {
                    let _ = writeln!(out, " refunded {} ({})", refund, item.refund_status);
                }
                None => out.push('\n'),
            }
        }
        let _ = writeln!(out, "  Items total:    {}", order.items_total());
        let _ = writeln!(out, "  Refunded total: {}", order.refunded_total());
    }

    if !order.status_history.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "History:");
        for change in &order.status_history {
            let _ = write!(
                out,
                "  {} -> {}",
                change.changed_at.format("%Y-%m-%d %H:%M"),
                change.status
            );
            match &change.note {
                Some(note) => {
                    let _ = writeln!(out, " ({note})");
                }
                None => out.push('\n'),
            }
        }
    }

    if !order.internal_note_history.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Internal notes:");
        for note in &order.internal_note_history {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                note.noted_at.format("%Y-%m-%d %H:%M"),
                note.author,
                note.text
            );
        }
    }

    out
}
