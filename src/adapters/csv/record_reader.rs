//! Reads preference rows from CSV.
//!
//! Expected header:
//! `user_id,age,occupation,location,language,preference_weight,preference`

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::domain::dataset::PreferenceRecord;
use crate::domain::foundation::{PreferenceName, UserId};
use crate::domain::user::UserProfile;

use super::DatasetError;

/// Raw row; numeric fields are parsed afterwards so errors can name them.
#[derive(Debug, Deserialize)]
struct CsvRow {
    user_id: String,
    age: String,
    occupation: String,
    location: String,
    language: String,
    preference_weight: String,
    preference: String,
}

/// Read every row of the CSV file at `path`.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<PreferenceRecord>, DatasetError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = read_records_from(file)?;
    info!(path = %path.display(), rows = records.len(), "Read preference rows");
    Ok(records)
}

/// Read every row from any CSV source.
pub fn read_records_from<R: Read>(source: R) -> Result<Vec<PreferenceRecord>, DatasetError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = index + 1;
        records.push(parse_row(row, result?)?);
    }
    Ok(records)
}

fn parse_row(row: usize, raw: CsvRow) -> Result<PreferenceRecord, DatasetError> {
    let user_id: UserId = raw
        .user_id
        .parse()
        .map_err(|e| DatasetError::invalid_field(row, "user_id", raw.user_id.as_str(), e))?;

    let age: u32 = raw
        .age
        .trim()
        .parse()
        .map_err(|e| DatasetError::invalid_field(row, "age", raw.age.as_str(), e))?;

    let weight: f64 = raw.preference_weight.trim().parse().map_err(|e| {
        DatasetError::invalid_field(row, "preference_weight", raw.preference_weight.as_str(), e)
    })?;

    let profile = UserProfile::new(
        age,
        raw.occupation.as_str(),
        raw.location.as_str(),
        raw.language.as_str(),
    )
    .map_err(|e| {
        let (field, value) = match e.field() {
            "occupation" => ("occupation", raw.occupation.as_str()),
            "location" => ("location", raw.location.as_str()),
            "language" => ("language", raw.language.as_str()),
            _ => ("age", raw.age.as_str()),
        };
        DatasetError::invalid_field(row, field, value, e)
    })?;

    let preference = PreferenceName::new(raw.preference.as_str())
        .map_err(|e| DatasetError::invalid_field(row, "preference", raw.preference.as_str(), e))?;

    PreferenceRecord::new(user_id, profile, preference, weight).map_err(|e| {
        DatasetError::invalid_field(row, "preference_weight", raw.preference_weight.as_str(), e)
    })
}
