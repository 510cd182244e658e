//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{RecordError, RecordResult};
use crate::types::Person;

use super::fields;

/// Ingest a CSV file into a list of [`Person`] records.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain `id`, `firstName`, `lastName` and `gender` (order can differ).
/// - A `birthDate` column is optional; empty cells load as an unknown birth date.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> RecordResult<Vec<Person>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> RecordResult<Vec<Person>> {
    let headers = rdr.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let mut required = [0usize; 4];
    for (slot, name) in required.iter_mut().zip(fields::REQUIRED) {
        *slot = position(name).ok_or_else(|| RecordError::SchemaMismatch {
            message: format!(
                "missing required column '{name}'. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        })?;
    }
    let [id_idx, first_idx, last_idx, gender_idx] = required;
    let birth_idx = position(fields::BIRTH_DATE);

    let mut people = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let row = row_idx0 + 2;
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        people.push(Person {
            person_id: fields::parse_id(row, cell(id_idx))?,
            first_name: fields::parse_name(row, fields::FIRST_NAME, cell(first_idx))?,
            last_name: fields::parse_name(row, fields::LAST_NAME, cell(last_idx))?,
            date_of_birth: match birth_idx {
                Some(idx) => fields::parse_birth_date(row, cell(idx))?,
                None => None,
            },
            gender: fields::parse_gender(row, cell(gender_idx))?,
        });
    }

    Ok(people)
}
