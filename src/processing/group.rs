//! Set and map groupings over a slice of [`Person`].

use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use chrono::NaiveDate;

use crate::types::Person;

use super::text::{fold_case, is_palindrome};

/// Partition `people` by `key`. Members of each group keep input order.
pub fn group_by<K, F>(people: &[Person], mut key: F) -> HashMap<K, Vec<Person>>
where
    K: Eq + Hash,
    F: FnMut(&Person) -> K,
{
    let mut groups: HashMap<K, Vec<Person>> = HashMap::new();
    for p in people {
        groups.entry(key(p)).or_default().push(p.clone());
    }
    groups
}

/// Group by exact (case-sensitive) last name.
pub fn group_by_last_name(people: &[Person]) -> HashMap<String, Vec<Person>> {
    group_by(people, |p| p.last_name.clone())
}

/// Distinct known birth dates in ascending order.
pub fn all_birth_dates(people: &[Person]) -> BTreeSet<NaiveDate> {
    people.iter().filter_map(|p| p.date_of_birth).collect()
}

/// Distinct palindromic first names.
///
/// Names that differ only by case count once; the spelling seen first in input order is kept.
pub fn unique_palindromic_first_names(people: &[Person]) -> BTreeSet<String> {
    let mut seen = HashSet::new();
    people
        .iter()
        .map(|p| p.first_name.as_str())
        .filter(|name| is_palindrome(name))
        .filter(|name| seen.insert(fold_case(name)))
        .map(str::to_owned)
        .collect()
}
