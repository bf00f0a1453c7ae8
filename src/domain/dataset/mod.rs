//! Dataset module - input rows and their collapse into graph content.

mod aggregate;
mod record;

pub use aggregate::{Dataset, PreferenceEdge};
pub use record::PreferenceRecord;
