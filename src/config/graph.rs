//! Graph database configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

const URI_SCHEMES: &[&str] = &[
    "neo4j://",
    "neo4j+s://",
    "neo4j+ssc://",
    "bolt://",
    "bolt+s://",
    "bolt+ssc://",
];

/// Neo4j connection configuration, read from `NEO4J_*` variables
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Bolt endpoint, e.g. `neo4j://localhost:7687`
    pub uri: String,

    /// Username for basic auth
    pub username: String,

    /// Password for basic auth
    pub password: SecretString,

    /// Target database (server default when unset)
    #[serde(default)]
    pub database: Option<String>,

    /// Driver pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

impl GraphConfig {
    /// Validate graph configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.uri.is_empty() {
            return Err(ValidationError::MissingRequired("NEO4J_URI"));
        }
        if !URI_SCHEMES.iter().any(|scheme| self.uri.starts_with(scheme)) {
            return Err(ValidationError::InvalidGraphUri);
        }
        if self.username.is_empty() {
            return Err(ValidationError::MissingRequired("NEO4J_USERNAME"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("NEO4J_PASSWORD"));
        }
        if self.max_connections == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            username: String::new(),
            password: SecretString::new(String::new()),
            database: None,
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> usize {
    4
}
