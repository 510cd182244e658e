//! Pure query functions over a slice of [`crate::types::Person`].
//!
//! Nothing here mutates its input: every function borrows `&[Person]` and returns a freshly
//! built `Vec`, set, or map that the caller owns. [`crate::store::RecordStore`] exposes the same
//! operations as methods.
//!
//! - [`filter`]: lookups by id, name, gender, and birth date
//! - [`group`]: birth-date sets, palindromic names, grouping by last name
//! - [`map`]: DTO projection and birth-date display strings
//! - [`reduce`]: age and average age
//! - [`text`]: case-insensitive comparison and palindromes
//! - [`calendar`]: every date of a calendar year
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use people_records::processing::{filter, group, map, reduce};
//! use people_records::types::{Gender, Person};
//!
//! let people = vec![
//!     Person::new(1, "Anna", "Berg", NaiveDate::from_ymd_opt(1985, 7, 2), Gender::Female),
//!     Person::new(2, "Erik", "Berg", NaiveDate::from_ymd_opt(1915, 3, 1), Gender::Male),
//!     Person::new(3, "Otto", "Lind", None, Gender::Male),
//! ];
//!
//! assert_eq!(filter::find_by_last_name(&people, "BERG").len(), 2);
//! assert_eq!(group::unique_palindromic_first_names(&people).len(), 2);
//!
//! let old = map::project_born_before(&people, NaiveDate::from_ymd_opt(1920, 1, 1).unwrap());
//! assert_eq!(old[0].display_name, "Erik Berg");
//!
//! let as_of = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//! assert_eq!(reduce::average_age(&people, as_of), Some((34.0 + 104.0) / 2.0));
//! ```

pub mod calendar;
pub mod filter;
pub mod group;
pub mod map;
pub mod reduce;
pub mod text;

pub use calendar::{generate_calendar_year, CalendarYear};
pub use text::is_palindrome;

#[cfg(test)]
pub(crate) fn sample_people() -> Vec<crate::types::Person> {
    use crate::types::{Gender, Person};
    use chrono::NaiveDate;

    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day);
    vec![
        Person::new(1, "Tea", "Håkansson", d(1968, 1, 25), Gender::Female),
        Person::new(2, "Otto", "Andersson", d(2012, 12, 19), Gender::Male),
        Person::new(3, "Anna", "Andersson", d(1985, 7, 2), Gender::Female),
        Person::new(4, "Erik", "Johansson", d(1975, 3, 14), Gender::Male),
        Person::new(5, "Lars", "Erik", d(1919, 11, 30), Gender::Male),
        Person::new(6, "Maja", "andersson", None, Gender::Female),
        Person::new(7, "Bob", "Lindqvist", d(1985, 7, 2), Gender::Male),
    ]
}
