//! CSV adapters - Preference rows on disk.

mod errors;
mod record_reader;
mod record_writer;

pub use errors::DatasetError;
pub use record_reader::{read_records, read_records_from};
pub use record_writer::{write_records, write_records_to};
