pub mod column;
pub mod cursor;
pub mod data_type;
pub mod identifiers;
pub mod row;
pub mod value;
