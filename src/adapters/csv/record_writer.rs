//! Writes preference rows as CSV, in the same layout the reader expects.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

use crate::domain::dataset::PreferenceRecord;

use super::DatasetError;

#[derive(Debug, Serialize)]
struct CsvRowRef<'a> {
    user_id: i64,
    age: u32,
    occupation: &'a str,
    location: &'a str,
    language: &'a str,
    preference_weight: f64,
    preference: &'a str,
}

impl<'a> From<&'a PreferenceRecord> for CsvRowRef<'a> {
    fn from(record: &'a PreferenceRecord) -> Self {
        Self {
            user_id: record.user_id.as_i64(),
            age: record.profile.age(),
            occupation: record.profile.occupation(),
            location: record.profile.location(),
            language: record.profile.language(),
            preference_weight: record.weight,
            preference: record.preference.as_str(),
        }
    }
}

/// Write `records` to a new file at `path`, replacing any existing file.
pub fn write_records(path: impl AsRef<Path>, records: &[PreferenceRecord]) -> Result<(), DatasetError> {
    let file = std::fs::File::create(path)?;
    write_records_to(file, records)
}

/// Column order shared with the reader.
const HEADER: [&str; 7] = [
    "user_id",
    "age",
    "occupation",
    "location",
    "language",
    "preference_weight",
    "preference",
];

/// Write `records` with a header row to any sink. The header is written
/// even when there are no records.
pub fn write_records_to<W: Write>(sink: W, records: &[PreferenceRecord]) -> Result<(), DatasetError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(CsvRowRef::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::csv::read_records_from;
    use crate::domain::foundation::{PreferenceName, UserId};
    use crate::domain::user::UserProfile;

    fn record(id: i64, preference: &str, weight: f64) -> PreferenceRecord {
        PreferenceRecord::new(
            UserId::new(id),
            UserProfile::new(44, "military member", "San Diego", "Mandarin").unwrap(),
            PreferenceName::new(preference).unwrap(),
            weight,
        )
        .unwrap()
    }

    #[test]
    fn writes_expected_header() {
        let mut buffer = Vec::new();
        write_records_to(&mut buffer, &[record(1, "Simple language", 0.25)]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("user_id,age,occupation,location,language,preference_weight,preference")
        );
        assert_eq!(
            lines.next(),
            Some("1,44,military member,San Diego,Mandarin,0.25,Simple language")
        );
    }

    #[test]
    fn written_file_reads_back() {
        let records = vec![
            record(1, "Simple language", 0.25),
            record(2, "Formal and academic tone", 0.731),
        ];
        let mut buffer = Vec::new();
        write_records_to(&mut buffer, &records).unwrap();

        let read_back = read_records_from(buffer.as_slice()).unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn empty_input_still_writes_header() {
        let mut buffer = Vec::new();
        write_records_to(&mut buffer, &[]).unwrap();

        let text = String::from_utf8(buffer.clone()).unwrap();
        assert_eq!(
            text,
            "user_id,age,occupation,location,language,preference_weight,preference\n"
        );
        assert!(read_records_from(buffer.as_slice()).unwrap().is_empty());
    }
}
