/// Broad class of a source column type, derived from the Postgres type name.
///
/// The class decides how a cell is decoded from the wire and which default
/// is substituted for a missing value in a NOT NULL column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Integer,
    Decimal,
    Boolean,
    Text,
    Timestamp,
    Date,
    /// Anything not in the known set; handled as free-form text.
    Other,
}

impl TypeClass {
    pub fn of(type_name: &str) -> Self {
        match type_name.trim().to_lowercase().as_str() {
            "smallint" | "integer" | "bigint" | "int2" | "int4" | "int8" => TypeClass::Integer,
            "numeric" | "decimal" | "real" | "double precision" => TypeClass::Decimal,
            "boolean" | "bool" => TypeClass::Boolean,
            "character varying" | "varchar" | "character" | "char" | "text" => TypeClass::Text,
            "timestamp without time zone" | "timestamp with time zone" | "timestamp" => {
                TypeClass::Timestamp
            }
            "date" => TypeClass::Date,
            _ => TypeClass::Other,
        }
    }

    /// Classes whose NOT NULL default is numeric zero rather than an empty
    /// string.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TypeClass::Integer | TypeClass::Decimal | TypeClass::Boolean
        )
    }
}
