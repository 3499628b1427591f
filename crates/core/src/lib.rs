//! CarVet Core - Shared domain types library.
//!
//! This crate provides the order-domain model used across all CarVet
//! components:
//! - `crm` - Order filtering and data-quality engines
//! - `cli` - Command-line dashboard tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! The model is deliberately permissive: incomplete or malformed order
//! records (empty emails, short VINs, mismatched totals) are representable
//! and are surfaced by the quality evaluator in `carvet-crm`, never rejected
//! here.
//!
//! # Modules
//!
//! - [`types`] - IDs, money, statuses, the order aggregate, field accessors,
//!   and table-column configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
