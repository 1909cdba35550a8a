pub mod base_types;
pub mod companies;
pub mod config;
pub mod error;
pub mod json_serialisation;
pub mod students;
pub mod tables;

pub use error::ConfigurationError;
