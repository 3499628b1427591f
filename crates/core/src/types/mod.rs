//! Core types for CarVet.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod column;
pub mod field;
pub mod id;
pub mod money;
pub mod order;
pub mod product;
pub mod status;

pub use column::{Column, ColumnType, MIN_COLUMN_WIDTH, visible_keys};
pub use field::{FieldEditError, FieldKey, FieldValue};
pub use id::*;
pub use money::{CurrencyCode, Money};
pub use order::{InternalNote, Order, OrderItem, StatusChange};
pub use product::ProductCode;
pub use status::*;
