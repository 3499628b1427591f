//! Statically-typed field access for the order table.
//!
//! The previous dashboard indexed orders by arbitrary string column keys,
//! so a typo'd key silently produced blank cells. [`FieldKey`] closes that
//! hole: every projectable field is an enum variant with a typed getter, a
//! display projection, and a gated setter. Search and column filtering in
//! `carvet-crm` run entirely through this table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Money;
use super::order::Order;
use super::status::{OrderStatus, PaymentStatus};

/// Every projectable field of an [`Order`], plus the synthetic
/// status-indicator pseudo-field.
///
/// `StatusIndicator` has no backing order value: it exists so column layouts
/// can place the quality traffic light, and it never participates in search
/// or filtering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    OrderId,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    PostalCode,
    City,
    OrderValue,
    OrderDate,
    PaymentStatus,
    OrderStatus,
    Manufacturer,
    Model,
    Vin,
    ListingAddress,
    ListingUrl,
    ReportUrl,
    DocumentNumber,
    DiscountCode,
    Currency,
    TaxId,
    CompanyId,
    StreetAddress,
    CustomerNote,
    InternalNote,
    /// Display name of the order's primary line, read-only.
    ProductType,
    /// Synthetic slot for the quality traffic light; no backing value.
    StatusIndicator,
}

impl FieldKey {
    /// Every field key, in default table order.
    pub const ALL: [Self; 28] = [
        Self::OrderId,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::PostalCode,
        Self::City,
        Self::OrderValue,
        Self::OrderDate,
        Self::PaymentStatus,
        Self::OrderStatus,
        Self::Manufacturer,
        Self::Model,
        Self::Vin,
        Self::ListingAddress,
        Self::ListingUrl,
        Self::ReportUrl,
        Self::DocumentNumber,
        Self::DiscountCode,
        Self::Currency,
        Self::TaxId,
        Self::CompanyId,
        Self::StreetAddress,
        Self::CustomerNote,
        Self::InternalNote,
        Self::ProductType,
        Self::StatusIndicator,
    ];

    /// Stable machine token, matching the serde form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderId => "order_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::PostalCode => "postal_code",
            Self::City => "city",
            Self::OrderValue => "order_value",
            Self::OrderDate => "order_date",
            Self::PaymentStatus => "payment_status",
            Self::OrderStatus => "order_status",
            Self::Manufacturer => "manufacturer",
            Self::Model => "model",
            Self::Vin => "vin",
            Self::ListingAddress => "listing_address",
            Self::ListingUrl => "listing_url",
            Self::ReportUrl => "report_url",
            Self::DocumentNumber => "document_number",
            Self::DiscountCode => "discount_code",
            Self::Currency => "currency",
            Self::TaxId => "tax_id",
            Self::CompanyId => "company_id",
            Self::StreetAddress => "street_address",
            Self::CustomerNote => "customer_note",
            Self::InternalNote => "internal_note",
            Self::ProductType => "product_type",
            Self::StatusIndicator => "status_indicator",
        }
    }

    /// Default column header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrderId => "Order ID",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::PostalCode => "Postal code",
            Self::City => "City",
            Self::OrderValue => "Order value",
            Self::OrderDate => "Order date",
            Self::PaymentStatus => "Payment status",
            Self::OrderStatus => "Order status",
            Self::Manufacturer => "Manufacturer",
            Self::Model => "Model",
            Self::Vin => "VIN",
            Self::ListingAddress => "Listing address",
            Self::ListingUrl => "Listing URL",
            Self::ReportUrl => "Report link",
            Self::DocumentNumber => "Document number",
            Self::DiscountCode => "Discount code",
            Self::Currency => "Currency",
            Self::TaxId => "Tax ID",
            Self::CompanyId => "Company ID",
            Self::StreetAddress => "Street address",
            Self::CustomerNote => "Customer note",
            Self::InternalNote => "Internal note",
            Self::ProductType => "Product type",
            Self::StatusIndicator => "Sync",
        }
    }

    /// Typed getter.
    ///
    /// `None` means the order has no value for this field: unset optional
    /// fields and the synthetic `StatusIndicator`. Contact strings are
    /// always present (possibly empty).
    #[must_use]
    pub fn value(self, order: &Order) -> Option<FieldValue> {
        match self {
            Self::OrderId => Some(FieldValue::Text(order.id.as_str().to_owned())),
            Self::FirstName => Some(FieldValue::Text(order.first_name.clone())),
            Self::LastName => Some(FieldValue::Text(order.last_name.clone())),
            Self::Email => Some(FieldValue::Text(order.email.clone())),
            Self::Phone => Some(FieldValue::Text(order.phone.clone())),
            Self::Address => Some(FieldValue::Text(order.address.clone())),
            Self::PostalCode => Some(FieldValue::Text(order.postal_code.clone())),
            Self::City => Some(FieldValue::Text(order.city.clone())),
            Self::OrderValue => Some(FieldValue::Money(order.order_value)),
            Self::OrderDate => Some(FieldValue::DateTime(order.order_date)),
            Self::PaymentStatus => Some(FieldValue::Payment(order.payment_status)),
            Self::OrderStatus => Some(FieldValue::Workflow(order.order_status)),
            Self::Manufacturer => order.manufacturer.clone().map(FieldValue::Text),
            Self::Model => order.model.clone().map(FieldValue::Text),
            Self::Vin => order.vin.clone().map(FieldValue::Text),
            Self::ListingAddress => order.listing_address.clone().map(FieldValue::Text),
            Self::ListingUrl => order.listing_url.clone().map(FieldValue::Text),
            Self::ReportUrl => order.report_url.clone().map(FieldValue::Text),
            Self::DocumentNumber => order.document_number.clone().map(FieldValue::Text),
            Self::DiscountCode => order.discount_code.clone().map(FieldValue::Text),
            Self::Currency => Some(FieldValue::Text(
                order.order_value.currency_code.code().to_owned(),
            )),
            Self::TaxId => order.tax_id.clone().map(FieldValue::Text),
            Self::CompanyId => order.company_id.clone().map(FieldValue::Text),
            Self::StreetAddress => order.street_address.clone().map(FieldValue::Text),
            Self::CustomerNote => order.customer_note.clone().map(FieldValue::Text),
            Self::InternalNote => order.internal_note.clone().map(FieldValue::Text),
            Self::ProductType => order
                .items
                .first()
                .map(|item| FieldValue::Text(item.product_name.clone())),
            Self::StatusIndicator => None,
        }
    }

    /// String projection used by free-text search, column filters, and
    /// table cells. `None` exactly when [`FieldKey::value`] is `None`.
    #[must_use]
    pub fn display_value(self, order: &Order) -> Option<String> {
        self.value(order).map(|value| value.display())
    }

    /// Gated setter for inline edits.
    ///
    /// Only plain-text fields accept edits here. Typed fields (value, date,
    /// statuses, currency) change through their dedicated operations, the
    /// derived `ProductType`, the immutable `OrderId`, and the synthetic
    /// `StatusIndicator` never do. Writing an empty string to an optional
    /// field clears it.
    ///
    /// # Errors
    ///
    /// Returns [`FieldEditError::ReadOnly`] for any non-text field.
    pub fn set_text(self, order: &mut Order, value: &str) -> Result<(), FieldEditError> {
        fn optional(value: &str) -> Option<String> {
            if value.is_empty() {
                None
            } else {
                Some(value.to_owned())
            }
        }

        match self {
            Self::FirstName => order.first_name = value.to_owned(),
            Self::LastName => order.last_name = value.to_owned(),
            Self::Email => order.email = value.to_owned(),
            Self::Phone => order.phone = value.to_owned(),
            Self::Address => order.address = value.to_owned(),
            Self::PostalCode => order.postal_code = value.to_owned(),
            Self::City => order.city = value.to_owned(),
            Self::Manufacturer => order.manufacturer = optional(value),
            Self::Model => order.model = optional(value),
            Self::Vin => order.vin = optional(value),
            Self::ListingAddress => order.listing_address = optional(value),
            Self::ListingUrl => order.listing_url = optional(value),
            Self::ReportUrl => order.report_url = optional(value),
            Self::DocumentNumber => order.document_number = optional(value),
            Self::DiscountCode => order.discount_code = optional(value),
            Self::TaxId => order.tax_id = optional(value),
            Self::CompanyId => order.company_id = optional(value),
            Self::StreetAddress => order.street_address = optional(value),
            Self::CustomerNote => order.customer_note = optional(value),
            Self::InternalNote => order.internal_note = optional(value),
            Self::OrderId
            | Self::OrderValue
            | Self::OrderDate
            | Self::PaymentStatus
            | Self::OrderStatus
            | Self::Currency
            | Self::ProductType
            | Self::StatusIndicator => return Err(FieldEditError::ReadOnly(self)),
        }
        Ok(())
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown field key: {s}"))
    }
}

/// A typed field projection.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Money(Money),
    DateTime(DateTime<Utc>),
    Payment(PaymentStatus),
    Workflow(OrderStatus),
}

impl FieldValue {
    /// Render for table cells and search.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Money(money) => money.to_string(),
            Self::DateTime(instant) => instant.format("%Y-%m-%d %H:%M").to_string(),
            Self::Payment(status) => status.to_string(),
            Self::Workflow(status) => status.to_string(),
        }
    }
}

/// Errors from the gated field setter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldEditError {
    /// The field is not a plain-text field and cannot be edited in place.
    #[error("field `{0}` is read-only")]
    ReadOnly(FieldKey),
}
