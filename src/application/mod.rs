//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Loading is the command side, recommendation the query side.

pub mod handlers;

pub use handlers::{
    LoadDatasetCommand, LoadDatasetHandler, LoadError, LoadSummary, RecommendError,
    RecommendPreferencesHandler, RecommendPreferencesQuery,
};
