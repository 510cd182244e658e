//! Field names and value conversion shared by the JSON and CSV readers.

use chrono::NaiveDate;

use crate::error::{RecordError, RecordResult};
use crate::types::Gender;

pub const ID: &str = "id";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const BIRTH_DATE: &str = "birthDate";
pub const GENDER: &str = "gender";

/// Fields every record must carry. `birthDate` is optional.
pub const REQUIRED: [&str; 4] = [ID, FIRST_NAME, LAST_NAME, GENDER];

fn parse_error(row: usize, column: &str, raw: &str, message: impl Into<String>) -> RecordError {
    RecordError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: message.into(),
    }
}

pub fn id_from_i64(row: usize, raw: &str, n: i64) -> RecordResult<i32> {
    i32::try_from(n).map_err(|_| parse_error(row, ID, raw, "id out of range for i32"))
}

pub fn parse_id(row: usize, raw: &str) -> RecordResult<i32> {
    let n = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| parse_error(row, ID, raw, e.to_string()))?;
    id_from_i64(row, raw, n)
}

pub fn parse_name(row: usize, column: &str, raw: &str) -> RecordResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(parse_error(row, column, raw, "name must not be empty"));
    }
    Ok(trimmed.to_owned())
}

/// Empty input means the birth date is unknown.
pub fn parse_birth_date(row: usize, raw: &str) -> RecordResult<Option<NaiveDate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| parse_error(row, BIRTH_DATE, raw, format!("expected YYYY-MM-DD: {e}")))
}

pub fn parse_gender(row: usize, raw: &str) -> RecordResult<Gender> {
    raw.parse::<Gender>()
        .map_err(|message| parse_error(row, GENDER, raw, message))
}
