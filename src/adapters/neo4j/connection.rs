//! Neo4j connection setup.

use neo4rs::{ConfigBuilder, Graph};
use secrecy::ExposeSecret;
use tracing::info;

use crate::config::GraphConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Open a connection pool to the configured Neo4j server.
///
/// The returned handle is passed explicitly to the graph adapters.
pub async fn connect(config: &GraphConfig) -> Result<Graph, DomainError> {
    let mut builder = ConfigBuilder::default()
        .uri(config.uri.as_str())
        .user(config.username.as_str())
        .password(config.password.expose_secret().as_str())
        .max_connections(config.max_connections);
    if let Some(database) = &config.database {
        builder = builder.db(database.as_str());
    }

    let neo4j_config = builder.build().map_err(|e| {
        DomainError::new(
            ErrorCode::ConnectionFailed,
            format!("Invalid Neo4j connection settings: {}", e),
        )
    })?;

    let graph = Graph::connect(neo4j_config).await.map_err(|e| {
        DomainError::new(
            ErrorCode::ConnectionFailed,
            format!("Failed to connect to Neo4j at {}: {}", config.uri, e),
        )
    })?;

    info!(uri = %config.uri, "Connected to Neo4j");
    Ok(graph)
}
