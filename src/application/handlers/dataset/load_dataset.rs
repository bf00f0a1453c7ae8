//! LoadDatasetHandler - Command handler that rebuilds the preference graph.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::adapters::csv::{read_records, DatasetError};
use crate::domain::dataset::{Dataset, PreferenceRecord};
use crate::domain::foundation::DomainError;
use crate::ports::PreferenceGraphWriter;

/// Command to replace the graph content with the given rows.
#[derive(Debug, Clone)]
pub struct LoadDatasetCommand {
    pub records: Vec<PreferenceRecord>,
}

impl LoadDatasetCommand {
    /// Build the command from the CSV file at `path`.
    pub fn from_csv_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Ok(Self {
            records: read_records(path)?,
        })
    }
}

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input rows could not be read or parsed.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// The graph store rejected a write.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Counts of what was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub users: usize,
    pub preferences: usize,
    pub edges: usize,
}

/// Handler for loading datasets.
///
/// Destructive: every existing node and relationship is deleted first.
pub struct LoadDatasetHandler {
    writer: Arc<dyn PreferenceGraphWriter>,
}

impl LoadDatasetHandler {
    pub fn new(writer: Arc<dyn PreferenceGraphWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, cmd: LoadDatasetCommand) -> Result<LoadSummary, LoadError> {
        // 1. Collapse rows into distinct nodes and edges
        let dataset = Dataset::from_records(cmd.records);

        // 2. Full wipe, then schema
        self.writer.clear().await?;
        self.writer.ensure_constraints().await?;
        info!("Cleared graph and ensured constraints");

        // 3. Nodes before edges
        for user in dataset.users() {
            self.writer.create_user(user).await?;
        }
        for preference in dataset.preferences() {
            self.writer.merge_preference(preference).await?;
        }
        for edge in dataset.edges() {
            self.writer
                .merge_edge(edge.user_id, &edge.preference, edge.weight)
                .await?;
        }

        let summary = LoadSummary {
            users: dataset.users().len(),
            preferences: dataset.preferences().len(),
            edges: dataset.edges().len(),
        };
        info!(
            users = summary.users,
            preferences = summary.preferences,
            edges = summary.edges,
            "Loaded preference graph"
        );

        Ok(summary)
    }
}
