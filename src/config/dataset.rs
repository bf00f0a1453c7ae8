//! Input dataset configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Location of the preference CSV, read from `CSV_FILE`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// Path of the input CSV
    pub file: PathBuf,
}

impl DatasetConfig {
    /// Validate dataset configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("CSV_FILE"));
        }
        Ok(())
    }
}
