//! In-memory adapters for tests and local development.

mod in_memory_preference_graph;

pub use in_memory_preference_graph::InMemoryPreferenceGraph;
