//! Core data model types.
//!
//! A [`Person`] is an immutable record loaded once from a source file. [`PersonDto`] is the
//! lightweight id + display name view produced by [`crate::processing::map`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender code of a [`Person`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    Male,
    Female,
    /// Any code other than male/female, including "unspecified".
    Other,
}

impl Gender {
    /// Upper-case code used in source files and display output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a gender code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" | "o" | "unspecified" | "x" => Ok(Self::Other),
            _ => Err("expected gender (male/female/other)".to_string()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single person record.
///
/// Equality and hashing cover every field, so two records are equal only if they agree on id,
/// names, birth date, and gender. The source file format is read by [`crate::ingestion`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    /// Identifier, assumed unique within a collection.
    pub person_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// `None` when the source did not record a birth date.
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
}

impl Person {
    /// Create a new person.
    pub fn new(
        person_id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: Option<NaiveDate>,
        gender: Gender,
    ) -> Self {
        Self {
            person_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            gender,
        }
    }

    /// `"<first> <last>"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Projection of a [`Person`] to its id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonDto {
    pub id: i32,
    pub display_name: String,
}

impl From<&Person> for PersonDto {
    fn from(person: &Person) -> Self {
        Self {
            id: person.person_id,
            display_name: person.display_name(),
        }
    }
}
