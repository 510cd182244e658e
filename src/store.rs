//! The immutable record store.
//!
//! A [`RecordStore`] owns the person collection for its whole lifetime and answers every query
//! by delegating to [`crate::processing`]. It has no interior mutability, so a shared reference
//! (or an `Arc<RecordStore>`) can be read from any number of threads.
//!
//! [`LazyStore`] defers loading to the first access and guarantees the load runs at most once.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::NaiveDate;

use crate::error::RecordResult;
use crate::ingestion::{ingest_from_path, IngestionOptions};
use crate::processing::{filter, group, map, reduce, text};
use crate::types::{Gender, Person, PersonDto};

/// Read-only collection of [`Person`] records plus the queries over it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordStore {
    people: Vec<Person>,
}

impl RecordStore {
    /// Wrap an already loaded collection. Load order is kept.
    pub fn new(people: Vec<Person>) -> Self {
        let mut ids = HashSet::with_capacity(people.len());
        for p in &people {
            if !ids.insert(p.person_id) {
                tracing::warn!(person_id = p.person_id, "duplicate person id; lookups return the first");
            }
        }
        tracing::debug!(people = people.len(), "record store ready");
        Self { people }
    }

    /// Load a person source file and wrap it.
    pub fn from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> RecordResult<Self> {
        ingest_from_path(path, options).map(Self::new)
    }

    /// All people in load order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn find_by_id(&self, id: i32) -> Option<&Person> {
        filter::find_by_id(&self.people, id)
    }

    pub fn find_by_first_name(&self, name: &str) -> Vec<Person> {
        filter::find_by_first_name(&self.people, name)
    }

    pub fn find_by_last_name(&self, name: &str) -> Vec<Person> {
        filter::find_by_last_name(&self.people, name)
    }

    pub fn find_by_first_or_last_name(&self, name: &str) -> Vec<Person> {
        filter::find_by_first_or_last_name(&self.people, name)
    }

    pub fn find_by_gender(&self, gender: Gender) -> Vec<Person> {
        filter::find_by_gender(&self.people, gender)
    }

    pub fn find_by_birth_date(&self, date: NaiveDate) -> HashSet<Person> {
        filter::find_by_birth_date(&self.people, date)
    }

    pub fn find_all_having_birth_date(&self) -> HashSet<Person> {
        filter::find_all_having_birth_date(&self.people)
    }

    /// Distinct known birth dates, oldest first.
    pub fn all_birth_dates(&self) -> BTreeSet<NaiveDate> {
        group::all_birth_dates(&self.people)
    }

    /// See [`map::format_birth_date`] for the format.
    pub fn birth_date_display(&self, id: i32) -> Option<String> {
        map::birth_date_display(&self.people, id)
    }

    pub fn compute_age(&self, person: &Person, as_of: NaiveDate) -> RecordResult<i32> {
        reduce::compute_age(person, as_of)
    }

    /// [`Self::compute_age`] as of the current local date.
    pub fn compute_age_today(&self, person: &Person) -> RecordResult<i32> {
        reduce::compute_age(person, reduce::today())
    }

    pub fn average_age(&self, as_of: NaiveDate) -> Option<f64> {
        reduce::average_age(&self.people, as_of)
    }

    /// [`Self::average_age`] as of the current local date.
    pub fn average_age_today(&self) -> Option<f64> {
        reduce::average_age(&self.people, reduce::today())
    }

    /// Same as [`text::is_palindrome`]; does not look at the stored records.
    pub fn is_palindrome(&self, candidate: &str) -> bool {
        text::is_palindrome(candidate)
    }

    pub fn unique_palindromic_first_names(&self) -> BTreeSet<String> {
        group::unique_palindromic_first_names(&self.people)
    }

    pub fn group_by_last_name(&self) -> HashMap<String, Vec<Person>> {
        group::group_by_last_name(&self.people)
    }

    pub fn project_born_before(&self, cutoff: NaiveDate) -> Vec<PersonDto> {
        map::project_born_before(&self.people, cutoff)
    }
}

impl From<Vec<Person>> for RecordStore {
    fn from(people: Vec<Person>) -> Self {
        Self::new(people)
    }
}

/// A [`RecordStore`] loaded from a file on first access.
///
/// Concurrent first callers wait for a single load. A failed load is returned to the caller
/// that ran it and the next call tries again.
pub struct LazyStore {
    path: PathBuf,
    options: IngestionOptions,
    store: OnceLock<RecordStore>,
    init: Mutex<()>,
}

impl LazyStore {
    pub fn new(path: impl Into<PathBuf>, options: IngestionOptions) -> Self {
        Self {
            path: path.into(),
            options,
            store: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// The loaded store, loading it first if needed.
    pub fn get(&self) -> RecordResult<&RecordStore> {
        if let Some(store) = self.store.get() {
            return Ok(store);
        }

        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self.init.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(store) = self.store.get() {
            return Ok(store);
        }
        let loaded = RecordStore::from_path(&self.path, &self.options)?;
        Ok(self.store.get_or_init(|| loaded))
    }

    /// Whether the load has already succeeded.
    pub fn is_loaded(&self) -> bool {
        self.store.get().is_some()
    }
}

impl fmt::Debug for LazyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyStore")
            .field("path", &self.path)
            .field("options", &self.options)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
