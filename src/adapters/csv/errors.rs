//! CSV dataset error types

use thiserror::Error;

/// Errors raised while reading or writing preference CSV files
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row {row}: invalid {field} {value:?}: {reason}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl DatasetError {
    pub fn invalid_field(
        row: usize,
        field: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        DatasetError::InvalidField {
            row,
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
