//! CarVet CRM - Order table engines.
//!
//! Everything the orders dashboard computes lives here, as pure functions
//! and small stateful widgets over `carvet-core` types:
//!
//! - [`filter`] - Free-text search, date ranges, and per-column filters
//! - [`quality`] - The sync-status indicator and its rule set
//! - [`items`] - Line-item status changes and refunds
//! - [`edit`] - Inline cell edits, gated by column configuration
//! - [`notepad`] - The standalone support notepad
//!
//! No I/O happens in this crate; loading and persisting orders is the
//! caller's concern (the CLI keeps them in a JSON file).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod edit;
pub mod filter;
pub mod items;
pub mod notepad;
pub mod quality;

pub use edit::{EditError, apply_edit};
pub use filter::{DateRange, FilterSpec, distinct_values, filter_orders, matches};
pub use items::{ItemOpError, refund_item, update_item_status};
pub use notepad::{NoteError, Notepad, QueryType, SupportNote};
pub use quality::{
    DEFAULT_SEVERITY_POLICY, Evaluator, QualityIssue, QualityReport, Severity, SeverityPolicy,
};
