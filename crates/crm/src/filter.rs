//! Order table filtering.
//!
//! Filtering is a pure in-memory pass over the loaded orders. Predicates
//! combine with AND across kinds (search, date range, column filters) and
//! with OR within a single column's allowlist. The pass never reorders or
//! mutates orders, so running the same [`FilterSpec`] twice yields the
//! same rows in the same positions.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use carvet_core::{FieldKey, Order};

// ============================================================================
// Date range
// ============================================================================

/// Inclusive calendar-day range on the order date.
///
/// Both endpoints and the order timestamp are truncated to the UTC calendar
/// day before comparison, so an order placed at 23:59 on the `to` day still
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// A range from `from` to `to`. Omitting `to` means the single day `from`.
    #[must_use]
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self {
            from,
            to: to.unwrap_or(from),
        }
    }

    /// A range covering exactly one day.
    #[must_use]
    pub const fn single_day(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    /// Whether `instant` falls inside the range, inclusive on both ends.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let day = instant.date_naive();
        self.from <= day && day <= self.to
    }
}

// ============================================================================
// Filter specification
// ============================================================================

/// Everything the orders table can filter on at once.
///
/// The default spec has no active predicate and matches every order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Free-text search term. Matched case-insensitively as a substring
    /// against the display value of every field in `visible_fields`.
    /// Empty means no search constraint.
    #[serde(default)]
    pub search_term: String,

    /// Fields the search term is allowed to look at. In the dashboard this
    /// is the set of currently visible columns, so hiding a column also
    /// removes it from search.
    #[serde(default)]
    pub visible_fields: BTreeSet<FieldKey>,

    /// Optional inclusive day range on the order date.
    #[serde(default)]
    pub date_range: Option<DateRange>,

    /// Per-column value allowlists. An order passes a column filter when
    /// its display value for that field is one of the allowed strings.
    /// An empty allowlist imposes no constraint on its column.
    #[serde(default)]
    pub column_filters: BTreeMap<FieldKey, BTreeSet<String>>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any predicate is active at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.date_range.is_none()
            && self.column_filters.values().all(BTreeSet::is_empty)
    }

    /// Set the free-text search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the fields the search term may match against.
    #[must_use]
    pub fn with_visible_fields(mut self, fields: impl IntoIterator<Item = FieldKey>) -> Self {
        self.visible_fields = fields.into_iter().collect();
        self
    }

    /// Restrict to orders placed inside `range`.
    #[must_use]
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Add allowed values for one column, extending any existing allowlist.
    #[must_use]
    pub fn with_allowed(
        mut self,
        key: FieldKey,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.column_filters
            .entry(key)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Filter `orders` down to the rows matching `spec`.
///
/// Input order is preserved and nothing is cloned; the result borrows from
/// the input slice.
#[instrument(skip_all)]
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], spec: &FilterSpec) -> Vec<&'a Order> {
    let matched: Vec<&Order> = orders.iter().filter(|order| matches(order, spec)).collect();
    tracing::debug!(total = orders.len(), matched = matched.len(), "orders filtered");
    matched
}

/// Whether a single order passes every active predicate in `spec`.
#[must_use]
pub fn matches(order: &Order, spec: &FilterSpec) -> bool {
    matches_search(order, spec) && matches_date(order, spec) && matches_columns(order, spec)
}

fn matches_search(order: &Order, spec: &FilterSpec) -> bool {
    if spec.search_term.is_empty() {
        return true;
    }
    let needle = spec.search_term.to_lowercase();
    spec.visible_fields.iter().any(|key| {
        key.display_value(order)
            .is_some_and(|value| value.to_lowercase().contains(&needle))
    })
}

fn matches_date(order: &Order, spec: &FilterSpec) -> bool {
    spec.date_range
        .is_none_or(|range| range.contains(order.order_date))
}

fn matches_columns(order: &Order, spec: &FilterSpec) -> bool {
    spec.column_filters.iter().all(|(key, allowed)| {
        if allowed.is_empty() {
            return true;
        }
        key.display_value(order)
            .is_some_and(|value| allowed.contains(&value))
    })
}

/// Sorted, de-duplicated candidate values for one column's allowlist,
/// drawn from the loaded orders. Blank values are skipped.
#[must_use]
pub fn distinct_values(orders: &[Order], key: FieldKey) -> Vec<String> {
    let values: BTreeSet<String> = orders
        .iter()
        .filter_map(|order| key.display_value(order))
        .filter(|value| !value.is_empty())
        .collect();
    values.into_iter().collect()
}
