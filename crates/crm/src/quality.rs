//! Data-quality evaluation.
//!
//! Every order row carries a sync-status indicator derived from a fixed
//! rule set. Rules are cheap field checks, run in a fixed order, and never
//! short-circuit: the full issue list for an order is always computed, so
//! the same input always produces the same report.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use carvet_core::{BadgeTone, Order, PaymentStatus};

/// Issue counts at or above this are escalated from warning to error
/// under the three-tier policy.
const ERROR_THRESHOLD: usize = 3;

/// Allowed absolute drift between the order value and the sum of its
/// line totals, in currency units. Covers rounding on discounted lines.
const PRICE_TOLERANCE: Decimal = Decimal::ONE;

/// Phone numbers shorter than this are considered malformed.
const MIN_PHONE_CHARS: usize = 9;

/// VINs shorter than this are considered malformed.
const MIN_VIN_CHARS: usize = 10;

// ============================================================================
// Severity
// ============================================================================

/// How issue counts collapse into a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityPolicy {
    /// Clean, 1-2 issues is a warning, 3 or more is an error.
    #[default]
    ThreeTier,
    /// Clean or error, nothing in between.
    Binary,
}

/// Policy used when none is configured.
pub const DEFAULT_SEVERITY_POLICY: SeverityPolicy = SeverityPolicy::ThreeTier;

impl SeverityPolicy {
    /// Map an issue count to a severity under this policy.
    #[must_use]
    pub const fn classify(self, issue_count: usize) -> Severity {
        match self {
            Self::ThreeTier => match issue_count {
                0 => Severity::Synchronized,
                n if n < ERROR_THRESHOLD => Severity::Warning,
                _ => Severity::Error,
            },
            Self::Binary => {
                if issue_count == 0 {
                    Severity::Synchronized
                } else {
                    Severity::Error
                }
            }
        }
    }
}

impl fmt::Display for SeverityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ThreeTier => "three-tier",
            Self::Binary => "binary",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SeverityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "three-tier" => Ok(Self::ThreeTier),
            "binary" => Ok(Self::Binary),
            other => Err(format!("unknown severity policy: {other}")),
        }
    }
}

/// Verdict tier for one order. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// No issues found.
    Synchronized,
    /// A small number of issues worth a look.
    Warning,
    /// Enough issues that the record needs attention.
    Error,
}

impl Severity {
    /// Badge tone for rendering the indicator.
    #[must_use]
    pub const fn badge_tone(self) -> BadgeTone {
        match self {
            Self::Synchronized => BadgeTone::Default,
            Self::Warning => BadgeTone::Secondary,
            Self::Error => BadgeTone::Destructive,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Synchronized => "Synchronized",
            Self::Warning => "Warning",
            Self::Error => "Error",
        };
        write!(f, "{s}")
    }
}

// ============================================================================
// Issues
// ============================================================================

/// One triggered quality rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityIssue {
    /// Inspection finished but no report link on file.
    MissingReportLink,
    /// Payment received but no invoice number on file.
    MissingDocumentNumber,
    /// Email empty or without an `@`.
    InvalidEmail,
    /// Phone empty or shorter than nine characters.
    InvalidPhone,
    /// VIN missing or shorter than ten characters.
    InvalidVin,
    /// Line totals drift from the order value by more than the tolerance.
    PriceMismatch,
    /// Street, postal code or city missing.
    IncompleteAddress,
}

impl QualityIssue {
    /// Operator-facing description, also used in tooltips.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingReportLink => "Missing report link",
            Self::MissingDocumentNumber => "Missing document number",
            Self::InvalidEmail => "Invalid email",
            Self::InvalidPhone => "Invalid phone number",
            Self::InvalidVin => "Invalid VIN number",
            Self::PriceMismatch => "Price mismatch",
            Self::IncompleteAddress => "Incomplete address",
        }
    }
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

// ============================================================================
// Report
// ============================================================================

/// Evaluator verdict for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub severity: Severity,
    /// Short indicator text, e.g. `Synchronized` or `2 issue(s)`.
    pub message: String,
    /// Triggered rules in evaluation order.
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    /// Whether no rule triggered.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Runs the quality rule set over orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    policy: SeverityPolicy,
}

impl Evaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policy: DEFAULT_SEVERITY_POLICY,
        }
    }

    #[must_use]
    pub const fn with_policy(policy: SeverityPolicy) -> Self {
        Self { policy }
    }

    /// Evaluate every rule against `order` and collapse the result.
    #[must_use]
    pub fn evaluate(&self, order: &Order) -> QualityReport {
        let mut issues = Vec::new();

        if order.order_status.is_terminal_success() && is_blank(order.report_url.as_deref()) {
            issues.push(QualityIssue::MissingReportLink);
        }
        if order.payment_status == PaymentStatus::Paid
            && is_blank(order.document_number.as_deref())
        {
            issues.push(QualityIssue::MissingDocumentNumber);
        }
        if !order.email.contains('@') {
            issues.push(QualityIssue::InvalidEmail);
        }
        if order.phone.chars().count() < MIN_PHONE_CHARS {
            issues.push(QualityIssue::InvalidPhone);
        }
        if order
            .vin
            .as_deref()
            .is_none_or(|vin| vin.chars().count() < MIN_VIN_CHARS)
        {
            issues.push(QualityIssue::InvalidVin);
        }
        if !order.items.is_empty()
            && (order.items_total() - order.order_value.amount).abs() > PRICE_TOLERANCE
        {
            issues.push(QualityIssue::PriceMismatch);
        }
        if order.address.is_empty() || order.postal_code.is_empty() || order.city.is_empty() {
            issues.push(QualityIssue::IncompleteAddress);
        }

        let severity = self.policy.classify(issues.len());
        let message = match severity {
            Severity::Synchronized => "Synchronized".to_owned(),
            Severity::Warning => format!("{} issue(s)", issues.len()),
            Severity::Error => format!("{} issues", issues.len()),
        };

        QualityReport {
            severity,
            message,
            issues,
        }
    }

    /// Evaluate `order` and hand the report to `sink` when anything
    /// triggered. Clean orders never reach the sink. The dashboard uses
    /// this to surface flagged orders without scanning reports twice.
    pub fn evaluate_with<F>(&self, order: &Order, mut sink: F) -> QualityReport
    where
        F: FnMut(&Order, &QualityReport),
    {
        let report = self.evaluate(order);
        if !report.is_clean() {
            sink(order, &report);
        }
        report
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
