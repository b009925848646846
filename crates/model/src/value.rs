use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// A dynamically-typed scalar fetched from a source row.
///
/// Source rows arrive with no compile-time schema, so every cell is carried
/// as a tagged variant and sanitization pattern-matches on the declared
/// column type rather than on the runtime shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True when the cell should be treated as absent: SQL NULL or an
    /// empty string.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Loose boolean interpretation across representations.
    ///
    /// Accepts numeric zero/nonzero, native booleans and the usual textual
    /// spellings ("true", "1", "on", "yes"); anything else is false.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::Boolean(v) => *v,
            Value::String(v) => {
                matches!(v.to_lowercase().as_str(), "true" | "1" | "on" | "yes")
            }
            Value::Date(_) | Value::Timestamp(_) => false,
            Value::Null => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "{v}"),
            Value::Timestamp(v) => write!(f, "{v}"),
            Value::Null => write!(f, "NULL"),
        }
    }
}
