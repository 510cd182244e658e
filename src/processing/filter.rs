//! Record selection over a slice of [`Person`].
//!
//! Every function returns owned copies; the input slice is never modified.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::types::{Gender, Person};

use super::text::eq_ignore_case;

/// Returns the people for which `predicate` returns `true`, in input order.
pub fn filter<F>(people: &[Person], mut predicate: F) -> Vec<Person>
where
    F: FnMut(&Person) -> bool,
{
    people.iter().filter(|p| predicate(*p)).cloned().collect()
}

/// First person with `person_id == id`.
pub fn find_by_id(people: &[Person], id: i32) -> Option<&Person> {
    people.iter().find(|p| p.person_id == id)
}

/// People whose first name equals `name`, ignoring case.
pub fn find_by_first_name(people: &[Person], name: &str) -> Vec<Person> {
    filter(people, |p| eq_ignore_case(&p.first_name, name))
}

/// People whose last name equals `name`, ignoring case.
pub fn find_by_last_name(people: &[Person], name: &str) -> Vec<Person> {
    filter(people, |p| eq_ignore_case(&p.last_name, name))
}

/// People whose first or last name equals `name`, ignoring case. Each person appears at most
/// once.
pub fn find_by_first_or_last_name(people: &[Person], name: &str) -> Vec<Person> {
    filter(people, |p| {
        eq_ignore_case(&p.first_name, name) || eq_ignore_case(&p.last_name, name)
    })
}

pub fn find_by_gender(people: &[Person], gender: Gender) -> Vec<Person> {
    filter(people, |p| p.gender == gender)
}

/// People born on `date`. Records without a birth date never match.
pub fn find_by_birth_date(people: &[Person], date: NaiveDate) -> HashSet<Person> {
    people
        .iter()
        .filter(|p| p.date_of_birth == Some(date))
        .cloned()
        .collect()
}

/// People whose birth date is known.
pub fn find_all_having_birth_date(people: &[Person]) -> HashSet<Person> {
    people
        .iter()
        .filter(|p| p.date_of_birth.is_some())
        .cloned()
        .collect()
}
