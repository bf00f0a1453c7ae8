//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Graph Ports
//!
//! - `PreferenceGraphWriter` - Wipe, constrain and populate the graph
//! - `PreferenceGraphReader` - Similarity and preference lookups

mod preference_graph_reader;
mod preference_graph_writer;

pub use preference_graph_reader::PreferenceGraphReader;
pub use preference_graph_writer::PreferenceGraphWriter;
