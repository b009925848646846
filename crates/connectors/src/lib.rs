pub mod destination;
pub mod error;
pub mod mysql;
pub mod postgres;
pub mod source;
