//! Inline cell editing, gated by the column configuration.
//!
//! A field accepts an inline edit only when the table layout carries that
//! column with the editable flag set. Visibility is separate: a hidden but
//! editable column still takes edits (the detail drawer uses the same
//! layout as the table).

use thiserror::Error;

use carvet_core::{Column, FieldEditError, FieldKey, Order};

/// Errors from inline edits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The layout has no editable column for this field.
    #[error("column `{0}` does not accept inline edits")]
    NotEditable(FieldKey),
    /// The field itself is read-only regardless of layout.
    #[error(transparent)]
    Field(#[from] FieldEditError),
}

/// Write `value` into `order` under `key`, if `columns` allows it.
///
/// Writing an empty value to an optional field clears the field.
///
/// # Errors
///
/// Returns [`EditError::NotEditable`] when the layout has no editable
/// column for `key`, or [`EditError::Field`] when the field refuses text
/// edits (computed and strongly-typed fields do).
pub fn apply_edit(
    order: &mut Order,
    columns: &[Column],
    key: FieldKey,
    value: &str,
) -> Result<(), EditError> {
    let editable = columns
        .iter()
        .any(|column| column.key == key && column.editable);
    if !editable {
        return Err(EditError::NotEditable(key));
    }
    key.set_text(order, value)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use carvet_core::{ColumnType, Money, OrderId};

    use super::*;

    fn order() -> Order {
        let placed = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        Order::new(OrderId::new("ORD001"), Money::czk(3_990), placed)
    }

    #[test]
    fn test_edit_through_editable_column() {
        let mut order = order();
        let columns = Column::defaults();
        apply_edit(&mut order, &columns, FieldKey::Email, "jana@example.cz").unwrap();
        assert_eq!(order.email, "jana@example.cz");
    }

    #[test]
    fn test_hidden_column_still_accepts_edits() {
        let mut order = order();
        let columns = Column::defaults();
        // VIN is hidden by default but editable.
        apply_edit(&mut order, &columns, FieldKey::Vin, "TMBJJ7NE3L0123456").unwrap();
        assert_eq!(order.vin.as_deref(), Some("TMBJJ7NE3L0123456"));
    }

    #[test]
    fn test_empty_value_clears_optional_field() {
        let mut order = order();
        order.vin = Some("TMBJJ7NE3L0123456".to_owned());
        let columns = Column::defaults();
        apply_edit(&mut order, &columns, FieldKey::Vin, "").unwrap();
        assert_eq!(order.vin, None);
    }

    #[test]
    fn test_non_editable_column_is_rejected() {
        let mut order = order();
        let columns = Column::defaults();
        let err = apply_edit(&mut order, &columns, FieldKey::OrderId, "ORD999").unwrap_err();
        assert_eq!(err, EditError::NotEditable(FieldKey::OrderId));
        assert_eq!(order.id, OrderId::new("ORD001"));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let mut order = order();
        let columns = [Column::new(FieldKey::Email, ColumnType::Text).editable()];
        let err = apply_edit(&mut order, &columns, FieldKey::Phone, "601234567").unwrap_err();
        assert_eq!(err, EditError::NotEditable(FieldKey::Phone));
    }

    #[test]
    fn test_read_only_field_error_passes_through() {
        let mut order = order();
        // A layout can mark any column editable, but computed fields
        // still refuse text writes.
        let columns = [Column::new(FieldKey::OrderValue, ColumnType::Currency).editable()];
        let err = apply_edit(&mut order, &columns, FieldKey::OrderValue, "4990").unwrap_err();
        assert_eq!(
            err,
            EditError::Field(FieldEditError::ReadOnly(FieldKey::OrderValue))
        );
    }
}
