//! Table column configuration for the orders dashboard.
//!
//! Columns are view configuration, not business data: they describe how one
//! [`FieldKey`] projects into the table (header, visibility, editability,
//! width, rendering hint). The filter engine only consumes the visible
//! subset, via [`visible_keys`], to scope free-text search.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::field::FieldKey;

/// Columns narrower than this become unusable once the resize handle and
/// sort affordance render, so widths clamp here from below.
pub const MIN_COLUMN_WIDTH: u16 = 80;

const DEFAULT_COLUMN_WIDTH: u16 = 120;

/// Rendering hint for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    Text,
    Number,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Currency,
    Status,
    Link,
    Select,
    StatusIndicator,
}

/// Column definition for the orders table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Field this column projects.
    pub key: FieldKey,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is currently visible.
    pub visible: bool,
    /// Whether cells in this column accept inline edits.
    pub editable: bool,
    /// Pixel width, clamped to [`MIN_COLUMN_WIDTH`] from below.
    #[serde(default = "default_width", deserialize_with = "clamped_width")]
    width: u16,
    /// Rendering hint.
    pub column_type: ColumnType,
}

const fn default_width() -> u16 {
    DEFAULT_COLUMN_WIDTH
}

fn clamped_width<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    u16::deserialize(deserializer).map(|width| width.max(MIN_COLUMN_WIDTH))
}

impl Column {
    /// Create a visible, non-editable column with the field's default label
    /// and the default width.
    #[must_use]
    pub fn new(key: FieldKey, column_type: ColumnType) -> Self {
        Self {
            key,
            label: key.label().to_owned(),
            visible: true,
            editable: false,
            width: DEFAULT_COLUMN_WIDTH,
            column_type,
        }
    }

    /// Hide the column by default.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Allow inline edits in this column.
    #[must_use]
    pub const fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Set the pixel width, clamped to [`MIN_COLUMN_WIDTH`].
    #[must_use]
    pub const fn with_width(mut self, width: u16) -> Self {
        self.width = if width < MIN_COLUMN_WIDTH {
            MIN_COLUMN_WIDTH
        } else {
            width
        };
        self
    }

    /// Current pixel width.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Resize the column, clamped to [`MIN_COLUMN_WIDTH`].
    pub const fn set_width(&mut self, width: u16) {
        self.width = if width < MIN_COLUMN_WIDTH {
            MIN_COLUMN_WIDTH
        } else {
            width
        };
    }

    /// The dashboard's default column layout.
    ///
    /// Covers every projectable field exactly once; hidden-by-default
    /// columns surface through the column picker.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(FieldKey::OrderId, ColumnType::Text).with_width(100),
            Self::new(FieldKey::FirstName, ColumnType::Text).editable(),
            Self::new(FieldKey::LastName, ColumnType::Text).editable(),
            Self::new(FieldKey::Email, ColumnType::Text)
                .editable()
                .with_width(200),
            Self::new(FieldKey::Phone, ColumnType::Text)
                .editable()
                .with_width(140),
            Self::new(FieldKey::Address, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(220),
            Self::new(FieldKey::PostalCode, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(100),
            Self::new(FieldKey::City, ColumnType::Text).hidden().editable(),
            Self::new(FieldKey::OrderValue, ColumnType::Currency),
            Self::new(FieldKey::OrderDate, ColumnType::Date).with_width(130),
            Self::new(FieldKey::PaymentStatus, ColumnType::Status).with_width(150),
            Self::new(FieldKey::OrderStatus, ColumnType::Status).with_width(170),
            Self::new(FieldKey::Manufacturer, ColumnType::Text)
                .editable()
                .with_width(130),
            Self::new(FieldKey::Model, ColumnType::Text)
                .editable()
                .with_width(110),
            Self::new(FieldKey::Vin, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(170),
            Self::new(FieldKey::ListingAddress, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(180),
            Self::new(FieldKey::ListingUrl, ColumnType::Link)
                .hidden()
                .editable()
                .with_width(200),
            Self::new(FieldKey::ReportUrl, ColumnType::Link)
                .editable()
                .with_width(200),
            Self::new(FieldKey::DocumentNumber, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(140),
            Self::new(FieldKey::DiscountCode, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(130),
            Self::new(FieldKey::Currency, ColumnType::Select)
                .hidden()
                .with_width(90),
            Self::new(FieldKey::TaxId, ColumnType::Text).hidden().editable(),
            Self::new(FieldKey::CompanyId, ColumnType::Text)
                .hidden()
                .editable(),
            Self::new(FieldKey::StreetAddress, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(200),
            Self::new(FieldKey::CustomerNote, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(240),
            Self::new(FieldKey::InternalNote, ColumnType::Text)
                .hidden()
                .editable()
                .with_width(240),
            Self::new(FieldKey::ProductType, ColumnType::Text).with_width(180),
            Self::new(FieldKey::StatusIndicator, ColumnType::StatusIndicator)
                .with_width(MIN_COLUMN_WIDTH),
        ]
    }
}

/// The set of visible field keys, which scopes free-text search.
#[must_use]
pub fn visible_keys(columns: &[Column]) -> BTreeSet<FieldKey> {
    columns
        .iter()
        .filter(|column| column.visible)
        .map(|column| column.key)
        .collect()
}
