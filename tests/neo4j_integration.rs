//! Integration tests against a live Neo4j server.
//!
//! Ignored by default. Run with the `NEO4J_*` variables pointing at a
//! disposable database:
//!
//! ```text
//! NEO4J_URI=neo4j://localhost:7687 NEO4J_USERNAME=neo4j NEO4J_PASSWORD=... \
//!     cargo test --test neo4j_integration -- --ignored
//! ```
//!
//! WARNING: each test wipes the target database.

use std::sync::Arc;

use preference_graph::adapters::csv::read_records_from;
use preference_graph::adapters::neo4j::{connect, Neo4jPreferenceReader, Neo4jPreferenceRepository};
use preference_graph::application::{
    LoadDatasetCommand, LoadDatasetHandler, RecommendPreferencesHandler, RecommendPreferencesQuery,
};
use preference_graph::config::GraphConfig;
use preference_graph::domain::foundation::{ErrorCode, PreferenceName, UserId};
use preference_graph::domain::recommendation::RecommendationPolicy;
use preference_graph::domain::user::UserProfile;
use preference_graph::ports::PreferenceGraphWriter;
use secrecy::SecretString;

const FIXTURE: &str = "\
user_id,age,occupation,location,language,preference_weight,preference
1,28,software engineer,New York,English,0.81,Short responses
2,32,software engineer,New York,English,0.42,Short responses
3,35,software engineer,New York,English,0.17,Detailed explanations
";

fn graph_config() -> GraphConfig {
    GraphConfig {
        uri: std::env::var("NEO4J_URI").expect("NEO4J_URI"),
        username: std::env::var("NEO4J_USERNAME").expect("NEO4J_USERNAME"),
        password: SecretString::new(std::env::var("NEO4J_PASSWORD").expect("NEO4J_PASSWORD")),
        database: std::env::var("NEO4J_DATABASE").ok(),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "requires a running Neo4j server"]
async fn example_scenario_against_neo4j() {
    let graph = connect(&graph_config()).await.unwrap();
    let records = read_records_from(FIXTURE.as_bytes()).unwrap();

    let loader = LoadDatasetHandler::new(Arc::new(Neo4jPreferenceRepository::new(graph.clone())));
    let summary = loader.handle(LoadDatasetCommand { records }).await.unwrap();
    assert_eq!(summary.users, 3);
    assert_eq!(summary.edges, 3);

    let recommender = RecommendPreferencesHandler::new(
        Arc::new(Neo4jPreferenceReader::new(graph)),
        RecommendationPolicy::default(),
    );
    let result = recommender
        .handle(RecommendPreferencesQuery {
            profile: UserProfile::new(30, "software engineer", "New York", "English").unwrap(),
        })
        .await
        .unwrap();

    let pairs: Vec<_> = result
        .iter()
        .map(|r| (r.preference.as_str(), r.count))
        .collect();
    assert_eq!(pairs, vec![("Short responses", 2), ("Detailed explanations", 1)]);
}

#[tokio::test]
#[ignore = "requires a running Neo4j server"]
async fn edge_to_missing_user_is_reported() {
    let graph = connect(&graph_config()).await.unwrap();
    let repository = Neo4jPreferenceRepository::new(graph);
    repository.clear().await.unwrap();
    repository.ensure_constraints().await.unwrap();

    let name = PreferenceName::new("Use of citations").unwrap();
    repository.merge_preference(&name).await.unwrap();

    let err = repository
        .merge_edge(UserId::new(404), &name, 0.5)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UserNotFound);
}
