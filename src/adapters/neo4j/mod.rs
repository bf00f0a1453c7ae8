//! Neo4j adapters - Graph database implementations of the graph ports.
//!
//! - `connect` - Builds the driver handle from `GraphConfig`
//! - `Neo4jPreferenceRepository` - Load-side writes
//! - `Neo4jPreferenceReader` - Recommendation queries

mod connection;
mod preference_reader;
mod preference_repository;

pub use connection::connect;
pub use preference_reader::Neo4jPreferenceReader;
pub use preference_repository::Neo4jPreferenceRepository;
