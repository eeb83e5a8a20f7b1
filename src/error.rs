//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image, CSV and YAML errors, and provides semantic variants
//! for malformed model rows and argument validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: field '{field}' must be a non-negative integer, got: {value:?}")]
    InvalidCount {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Row {row}: field '{field}' must be a number, got: {value:?}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}
