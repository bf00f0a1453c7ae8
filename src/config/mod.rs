//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Each section reads the variables
//! sharing one prefix:
//!
//! - `NEO4J_URI`, `NEO4J_USERNAME`, `NEO4J_PASSWORD`, `NEO4J_DATABASE`,
//!   `NEO4J_MAX_CONNECTIONS` -> [`GraphConfig`]
//! - `CSV_FILE` -> [`DatasetConfig`]
//! - `RECOMMENDER_AGE_WINDOW`, `RECOMMENDER_SIMILAR_USERS`,
//!   `RECOMMENDER_TOP_N` -> [`RecommenderConfig`]
//!
//! # Example
//!
//! ```no_run
//! use preference_graph::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Loading {}", config.dataset.file.display());
//! ```

mod dataset;
mod error;
mod graph;
mod recommender;

pub use dataset::DatasetConfig;
pub use error::{ConfigError, ValidationError};
pub use graph::GraphConfig;
pub use recommender::RecommenderConfig;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Neo4j connection
    pub graph: GraphConfig,

    /// Input CSV location
    pub dataset: DatasetConfig,

    /// Recommendation tuning
    #[serde(default)]
    pub recommender: RecommenderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads each section from the variables with its prefix
    /// 3. Deserializes into typed configuration structs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Ok(Self {
            graph: load_section("NEO4J")?,
            dataset: load_section("CSV")?,
            recommender: load_section("RECOMMENDER")?,
        })
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.graph.validate()?;
        self.dataset.validate()?;
        self.recommender.validate()?;
        Ok(())
    }
}

fn load_section<T: DeserializeOwned>(prefix: &str) -> Result<T, ConfigError> {
    let section = config::Config::builder()
        .add_source(config::Environment::with_prefix(prefix).prefix_separator("_"))
        .build()?
        .try_deserialize()?;

    Ok(section)
}
