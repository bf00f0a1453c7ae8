//! Preference Graph - load the configured CSV into Neo4j and print
//! recommendations for a sample new user.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use preference_graph::adapters::neo4j::{self, Neo4jPreferenceReader, Neo4jPreferenceRepository};
use preference_graph::application::{
    LoadDatasetCommand, LoadDatasetHandler, RecommendPreferencesHandler, RecommendPreferencesQuery,
};
use preference_graph::config::AppConfig;
use preference_graph::domain::recommendation::format_recommendations;
use preference_graph::domain::user::UserProfile;
use preference_graph::telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    telemetry::init_tracing("info");

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let graph = neo4j::connect(&config.graph).await?;

    // Load
    let command = LoadDatasetCommand::from_csv_file(&config.dataset.file)
        .with_context(|| format!("Failed to read {}", config.dataset.file.display()))?;
    let loader = LoadDatasetHandler::new(Arc::new(Neo4jPreferenceRepository::new(graph.clone())));
    let summary = loader
        .handle(command)
        .await
        .context("Failed to load preference graph")?;
    info!(?summary, "Load complete");

    // Recommend for a user who is not in the graph
    let recommender = RecommendPreferencesHandler::new(
        Arc::new(Neo4jPreferenceReader::new(graph)),
        config.recommender.policy(),
    );
    let profile = UserProfile::new(30, "software engineer", "New York", "English")?;
    let recommendations = recommender
        .handle(RecommendPreferencesQuery { profile })
        .await
        .context("Failed to compute recommendations")?;

    println!(
        "Recommended preferences for the new user: {}",
        format_recommendations(&recommendations)
    );
    Ok(())
}
