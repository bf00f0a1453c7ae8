//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `neo4j` - Graph database (Bolt protocol via `neo4rs`)
//! - `memory` - In-memory graph for tests
//! - `csv` - Preference rows on disk

pub mod csv;
pub mod memory;
pub mod neo4j;

pub use self::csv::{read_records, write_records, DatasetError};
pub use memory::InMemoryPreferenceGraph;
pub use neo4j::{Neo4jPreferenceReader, Neo4jPreferenceRepository};
