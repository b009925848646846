pub mod error;
pub mod report;
pub mod runner;
pub mod sanitize;
pub mod schema;
pub mod settings;
pub mod transfer;
pub mod typemap;

#[cfg(test)]
pub(crate) mod testkit;
