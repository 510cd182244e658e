//! Projections of [`Person`] records.

use chrono::{Datelike, NaiveDate};

use crate::types::{Person, PersonDto};

use super::filter::find_by_id;

/// [`PersonDto`]s for everyone born strictly before `cutoff`.
///
/// People with an unknown birth date are left out.
pub fn project_born_before(people: &[Person], cutoff: NaiveDate) -> Vec<PersonDto> {
    people
        .iter()
        .filter(|p| p.date_of_birth.is_some_and(|dob| dob < cutoff))
        .map(PersonDto::from)
        .collect()
}

/// Formats a date as `"<WEEKDAY> <DAY> <MONTH> <YEAR>"`, e.g. `"WEDNESDAY 19 DECEMBER 2012"`.
///
/// Weekday and month use English names regardless of locale. Day and year are plain integers:
/// no padding, and a leading `-` only for years before 1 CE.
pub fn format_birth_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} {}",
        date.format("%A").to_string().to_ascii_uppercase(),
        date.day(),
        date.format("%B").to_string().to_ascii_uppercase(),
        date.year()
    )
}

/// Display string of the birth date of the person with `id`.
///
/// `None` if no such person exists or the birth date is unknown.
pub fn birth_date_display(people: &[Person], id: i32) -> Option<String> {
    find_by_id(people, id)
        .and_then(|p| p.date_of_birth)
        .map(format_birth_date)
}
