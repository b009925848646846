use model::{column::ColumnMetadata, data_type::TypeClass, row::RowData, value::Value};

/// Produce the positional parameter list for one row.
///
/// The output order is derived from `columns`, the same sequence the INSERT
/// column list is built from, which is what keeps positional binding and
/// column order in lockstep.
pub fn sanitize_row(row: &RowData, columns: &[ColumnMetadata]) -> Vec<Value> {
    columns
        .iter()
        .map(|col| sanitize_field(row.get_value(&col.name), col))
        .collect()
}

fn sanitize_field(value: Value, col: &ColumnMetadata) -> Value {
    let class = col.type_class();

    let value = if value.is_missing() {
        if !col.is_nullable {
            if class.is_numeric() {
                Value::Int(0)
            } else {
                Value::String(String::new())
            }
        } else {
            Value::Null
        }
    } else {
        value
    };

    // Booleans always land as 0/1, whatever representation they arrived in.
    if class == TypeClass::Boolean {
        coerce_bool(&value)
    } else {
        value
    }
}

/// Map any value to a 0/1 integer. Idempotent: an already-coerced 0 or 1
/// maps to itself.
pub fn coerce_bool(value: &Value) -> Value {
    Value::Int(if value.truthy() { 1 } else { 0 })
}
