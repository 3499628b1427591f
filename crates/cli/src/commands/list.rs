//! List orders, filtered like the dashboard table.
//!
//! # Usage
//!
//! ```bash
//! # Everything, default columns
//! carvet list
//!
//! # Paid Škoda orders from January, searching visible columns only
//! carvet list --search škoda --payment paid --from 2024-01-01 --to 2024-01-31
//!
//! # Pick the columns (and with them, the search scope)
//! carvet list --columns order_id,last_name,vin,order_status --search zzz
//! ```
//!
//! # Environment Variables
//!
//! - `CARVET_DATA` - Path of the order book JSON file (`--data` overrides)
//! - `CARVET_SEVERITY_POLICY` - Severity policy for the sync column

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use carvet_core::{Column, FieldKey, Order, OrderStatus, PaymentStatus, visible_keys};
use carvet_crm::{DateRange, Evaluator, FilterSpec, filter_orders};

use crate::config::CliConfig;
use crate::data;

/// Everything `carvet list` accepts.
pub struct ListArgs {
    pub data: Option<PathBuf>,
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub payment: Vec<PaymentStatus>,
    pub status: Vec<OrderStatus>,
    pub city: Vec<String>,
    pub columns: Vec<FieldKey>,
}

/// Render the filtered orders table.
///
/// # Errors
///
/// Returns an error when the data file cannot be loaded.
pub fn run(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_data_path(args.data.clone());
    let orders = data::load_orders(&config.data_path)?;

    let columns = layout(&args.columns);
    let spec = build_spec(args, &columns);
    let rows = filter_orders(&orders, &spec);

    let evaluator = Evaluator::with_policy(config.severity_policy);
    let table = render_table(&columns, &rows, &evaluator);

    #[allow(clippy::print_stdout)]
    {
        println!("{table}");
    }

    info!("{} of {} orders shown", rows.len(), orders.len());
    Ok(())
}

/// The default layout, or the default layout restricted to `keys`.
fn layout(keys: &[FieldKey]) -> Vec<Column> {
    let mut columns = Column::defaults();
    if !keys.is_empty() {
        for column in &mut columns {
            column.visible = keys.contains(&column.key);
        }
    }
    columns
}

fn build_spec(args: &ListArgs, columns: &[Column]) -> FilterSpec {
    let mut spec = FilterSpec::new().with_visible_fields(visible_keys(columns));

    if let Some(search) = &args.search
        && !search.is_empty()
    {
        spec = spec.with_search(search.clone());
    }
    if let Some(from) = args.from {
        spec = spec.with_date_range(DateRange::new(from, args.to));
    }
    if !args.payment.is_empty() {
        spec = spec.with_allowed(
            FieldKey::PaymentStatus,
            args.payment.iter().map(ToString::to_string),
        );
    }
    if !args.status.is_empty() {
        spec = spec.with_allowed(
            FieldKey::OrderStatus,
            args.status.iter().map(ToString::to_string),
        );
    }
    if !args.city.is_empty() {
        spec = spec.with_allowed(FieldKey::City, args.city.iter().cloned());
    }
    spec
}

/// Longest cell the table will print before truncating with an ellipsis.
const MAX_CELL_CHARS: usize = 36;

fn render_table(columns: &[Column], rows: &[&Order], evaluator: &Evaluator) -> String {
    let visible: Vec<&Column> = columns.iter().filter(|c| c.visible).collect();

    let header: Vec<String> = visible.iter().map(|c| c.label.clone()).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|order| {
            visible
                .iter()
                .map(|column| cell(column.key, order, evaluator))
                .collect()
        })
        .collect();

    // Fit each column to its widest cell.
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    push_separator(&mut out, &widths);
    for row in &body {
        push_row(&mut out, row, &widths);
    }
    if body.is_empty() {
        out.push_str("(no orders match)\n");
    }
    out
}

fn cell(key: FieldKey, order: &Order, evaluator: &Evaluator) -> String {
    if key == FieldKey::StatusIndicator {
        return evaluator.evaluate(order).message;
    }
    let text = key.display_value(order).unwrap_or_else(|| "-".to_owned());
    truncate(&text, MAX_CELL_CHARS)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut first = true;
    for (text, width) in cells.iter().zip(widths) {
        if !first {
            out.push_str("  ");
        }
        first = false;
        out.push_str(text);
        for _ in text.chars().count()..*width {
            out.push(' ');
        }
    }
    // Trailing pad spaces on the last column are noise.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    let mut first = true;
    for width in widths {
        if !first {
            out.push_str("  ");
        }
        first = false;
        for _ in 0..*width {
            out.push('-');
        }
    }
    out.push('\n');
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use carvet_core::{Money, OrderId};

    use super::*;

    fn order(id: &str, city: &str) -> Order {
        let placed = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let mut order = Order::new(OrderId::new(id), Money::czk(3_990), placed);
        order.first_name = "Jan".to_owned();
        order.last_name = "Novák".to_owned();
        order.city = city.to_owned();
        order
    }

    #[test]
    fn test_layout_restricts_visibility() {
        let columns = layout(&[FieldKey::OrderId, FieldKey::Vin]);
        let visible = visible_keys(&columns);
        assert_eq!(visible.len(), 2);
        assert!(visible.contains(&FieldKey::Vin));
        // Every default column survives, only visibility changes.
        assert_eq!(columns.len(), Column::defaults().len());
    }

    #[test]
    fn test_build_spec_wires_filters() {
        let columns = layout(&[]);
        let args = ListArgs {
            data: None,
            search: Some("škoda".to_owned()),
            from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            to: None,
            payment: vec![PaymentStatus::Paid],
            status: vec![],
            city: vec!["Praha".to_owned()],
            columns: vec![],
        };
        let spec = build_spec(&args, &columns);
        assert_eq!(spec.search_term, "škoda");
        assert_eq!(
            spec.date_range,
            Some(DateRange::single_day(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            ))
        );
        let paid = spec.column_filters.get(&FieldKey::PaymentStatus).unwrap();
        assert!(paid.contains("Paid"));
        assert!(spec.visible_fields.contains(&FieldKey::OrderId));
        assert!(!spec.visible_fields.contains(&FieldKey::Vin));
    }

    #[test]
    fn test_render_table_pads_and_truncates() {
        let prague = order("ORD0001", "Praha");
        let long = order("ORD0002", &"x".repeat(60));
        let rows = vec![&prague, &long];
        let columns = layout(&[FieldKey::OrderId, FieldKey::City]);
        let table = render_table(&columns, &rows, &Evaluator::new());

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Order ID  City");
        assert!(lines[2].starts_with("ORD0001   Praha"));
        assert!(lines[3].contains('…'));
    }

    #[test]
    fn test_render_table_empty_state() {
        let columns = layout(&[FieldKey::OrderId]);
        let table = render_table(&columns, &[], &Evaluator::new());
        assert!(table.contains("(no orders match)"));
    }

    #[test]
    fn test_indicator_column_renders_quality_message() {
        let defective = order("ORD0001", "");
        let rows = vec![&defective];
        let columns = layout(&[FieldKey::OrderId, FieldKey::StatusIndicator]);
        let table = render_table(&columns, &rows, &Evaluator::new());
        // Empty contact fields trip several rules.
        assert!(table.contains("issues"));
    }
}
