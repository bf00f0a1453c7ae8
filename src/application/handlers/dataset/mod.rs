//! Dataset command handlers.

mod load_dataset;

pub use load_dataset::{LoadDatasetCommand, LoadDatasetHandler, LoadError, LoadSummary};
