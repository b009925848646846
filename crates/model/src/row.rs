use crate::value::Value;
use serde::Serialize;

/// One cell of a fetched row.
#[derive(Debug, Clone, Serialize)]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
}

/// A single source row: an ordered mapping from column name to scalar.
///
/// Transient — built from one fetched page, sanitized, inserted and then
/// discarded.
#[derive(Debug, Clone, Serialize)]
pub struct RowData {
    pub table: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(table: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            table: table.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    /// Value for `field`, `Value::Null` when the field is absent.
    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .map(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}
