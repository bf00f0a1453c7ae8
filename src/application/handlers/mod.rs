//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dataset;
pub mod recommendation;

pub use dataset::{LoadDatasetCommand, LoadDatasetHandler, LoadError, LoadSummary};
pub use recommendation::{RecommendError, RecommendPreferencesHandler, RecommendPreferencesQuery};
