//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"id":1, ...}, {"id":2, ...}]`
//! - A single JSON object
//! - Newline-delimited JSON (NDJSON): `{"id":1, ...}\n{"id":2, ...}\n`
//!
//! Each object must carry `id`, `firstName`, `lastName` and `gender`. `birthDate` may be missing
//! or `null`, which loads as an unknown birth date.

use std::fs;
use std::path::Path;

use crate::error::{RecordError, RecordResult};
use crate::types::Person;

use super::fields;

/// Ingest a JSON file into a list of [`Person`] records.
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> RecordResult<Vec<Person>> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest JSON from an in-memory string.
pub fn ingest_json_from_str(input: &str) -> RecordResult<Vec<Person>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RecordError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => people_from_values(&items),
            serde_json::Value::Object(_) => people_from_values(std::slice::from_ref(&v)),
            _ => Err(RecordError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                RecordError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        people_from_values(&values)
    }
}

fn people_from_values(values: &[serde_json::Value]) -> RecordResult<Vec<Person>> {
    values
        .iter()
        .enumerate()
        .map(|(idx0, v)| person_from_value(idx0 + 1, v))
        .collect()
}

fn person_from_value(row: usize, v: &serde_json::Value) -> RecordResult<Person> {
    let obj = v.as_object().ok_or_else(|| RecordError::SchemaMismatch {
        message: format!("row {row} is not a json object"),
    })?;

    for name in fields::REQUIRED {
        if obj.get(name).is_none_or(|v| v.is_null()) {
            return Err(RecordError::SchemaMismatch {
                message: format!("row {row} missing required field '{name}'"),
            });
        }
    }

    let id = match &obj[fields::ID] {
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(n) => fields::id_from_i64(row, &n.to_string(), n)?,
            None => {
                return Err(RecordError::ParseError {
                    row,
                    column: fields::ID.to_string(),
                    raw: n.to_string(),
                    message: "expected integer number".to_string(),
                });
            }
        },
        serde_json::Value::String(s) => fields::parse_id(row, s)?,
        other => {
            return Err(RecordError::ParseError {
                row,
                column: fields::ID.to_string(),
                raw: other.to_string(),
                message: "expected integer number".to_string(),
            });
        }
    };

    let first_name = fields::parse_name(row, fields::FIRST_NAME, expect_str(row, obj, fields::FIRST_NAME)?)?;
    let last_name = fields::parse_name(row, fields::LAST_NAME, expect_str(row, obj, fields::LAST_NAME)?)?;
    let gender = fields::parse_gender(row, expect_str(row, obj, fields::GENDER)?)?;

    let date_of_birth = match obj.get(fields::BIRTH_DATE) {
        None | Some(serde_json::Value::Null) => None,
        Some(_) => fields::parse_birth_date(row, expect_str(row, obj, fields::BIRTH_DATE)?)?,
    };

    Ok(Person {
        person_id: id,
        first_name,
        last_name,
        date_of_birth,
        gender,
    })
}

fn expect_str<'a>(
    row: usize,
    obj: &'a serde_json::Map<String, serde_json::Value>,
    column: &str,
) -> RecordResult<&'a str> {
    let v = &obj[column];
    v.as_str().ok_or_else(|| RecordError::ParseError {
        row,
        column: column.to_string(),
        raw: v.to_string(),
        message: "expected string".to_string(),
    })
}
