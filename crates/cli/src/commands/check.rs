//! Run the data-quality rules over the order book.
//!
//! # Usage
//!
//! ```bash
//! # Use the configured policy
//! carvet check
//!
//! # Force a policy for this run
//! carvet check --policy binary
//!
//! # Just one order, from an explicit file
//! carvet check ORD0007 --data demo.json
//! ```
//!
//! Flagged orders are logged one per line with their triggered rules;
//! the summary line reports how the checked set splits across severities.
//!
//! # Environment Variables
//!
//! - `CARVET_DATA` - Path of the order book JSON file (`--data` overrides)
//! - `CARVET_SEVERITY_POLICY` - Default policy when `--policy` is absent

use std::path::PathBuf;

use tracing::{info, warn};

use carvet_core::Order;
use carvet_crm::{Evaluator, Severity, SeverityPolicy};

use crate::config::CliConfig;
use crate::data;

/// Evaluate the book (or one order) and log the flagged records.
///
/// # Errors
///
/// Returns an error when the data file cannot be loaded or `order_id`
/// names an order that is not in it.
pub fn run(
    data: Option<PathBuf>,
    order_id: Option<&str>,
    policy: Option<SeverityPolicy>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_data_path(data);
    let orders = data::load_orders(&config.data_path)?;
    let rows = select(&orders, order_id)?;

    let policy = policy.unwrap_or(config.severity_policy);
    let evaluator = Evaluator::with_policy(policy);

    let mut clean = 0usize;
    let mut warnings = 0usize;
    let mut errors = 0usize;

    for order in rows {
        let report = evaluator.evaluate_with(order, |order, report| {
            let issues: Vec<&str> = report.issues.iter().map(|i| i.message()).collect();
            warn!(
                order = %order.id,
                severity = %report.severity,
                issues = ?issues,
                "{}",
                report.message
            );
        });
        match report.severity {
            Severity::Synchronized => clean += 1,
            Severity::Warning => warnings += 1,
            Severity::Error => errors += 1,
        }
    }

    info!(
        "Checked {} orders under the {policy} policy: {clean} synchronized, \
         {warnings} with warnings, {errors} with errors",
        clean + warnings + errors
    );
    Ok(())
}

/// The orders to check: the whole book, or just the one named.
fn select<'a>(orders: &'a [Order], order_id: Option<&str>) -> Result<Vec<&'a Order>, String> {
    match order_id {
        None => Ok(orders.iter().collect()),
        Some(id) => orders
            .iter()
            .find(|order| order.id.as_str() == id)
            .map(|order| vec![order])
            .ok_or_else(|| format!("Order not found: {id}")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use carvet_core::{Money, OrderId};

    use super::*;

    fn book() -> Vec<Order> {
        let placed = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        vec![
            Order::new(OrderId::new("ORD0001"), Money::czk(2_990), placed),
            Order::new(OrderId::new("ORD0002"), Money::czk(3_990), placed),
        ]
    }

    #[test]
    fn test_select_without_id_takes_the_whole_book() {
        let orders = book();
        let rows = select(&orders, None).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_select_narrows_to_the_named_order() {
        let orders = book();
        let rows = select(&orders, Some("ORD0002")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, OrderId::new("ORD0002"));
    }

    #[test]
    fn test_select_reports_unknown_order() {
        let orders = book();
        let err = select(&orders, Some("ORD9999")).unwrap_err();
        assert_eq!(err, "Order not found: ORD9999");
    }
}
