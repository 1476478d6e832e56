use thiserror::Error;

/// Rejected field configuration value.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{attribute}: `{value}` is not a valid number")]
    InvalidNumber {
        attribute: &'static str,
        value: String,
    },
    #[error("{attribute}: `{value}` is not a log level")]
    InvalidLevel {
        attribute: &'static str,
        value: String,
    },
    #[error("{attribute}: {value} is out of range (expected {expected})")]
    OutOfRange {
        attribute: &'static str,
        value: f64,
        expected: &'static str,
    },
}
