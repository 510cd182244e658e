//! `people-records` loads a fixed collection of person records into an immutable in-memory
//! [`store::RecordStore`] and answers lookup, grouping, and aggregation queries over it.
//!
//! ## Loading
//!
//! [`ingestion::ingest_from_path`] reads a person source file, picking the format from the file
//! extension (or from [`ingestion::IngestionOptions::format`]):
//!
//! - **JSON**: `.json` (array of objects) and `.ndjson` (newline-delimited objects)
//! - **CSV**: `.csv` with a header row
//!
//! Every record has the fields `id`, `firstName`, `lastName`, `birthDate` (ISO `YYYY-MM-DD`,
//! optional) and `gender` (`MALE`, `FEMALE`, `OTHER`). A missing, `null`, or empty `birthDate`
//! loads as `None`.
//!
//! ```no_run
//! use people_records::ingestion::IngestionOptions;
//! use people_records::store::RecordStore;
//!
//! # fn main() -> Result<(), people_records::RecordError> {
//! let store = RecordStore::from_path("people.json", &IngestionOptions::default())?;
//! println!("people={}", store.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Querying
//!
//! ```rust
//! use chrono::NaiveDate;
//! use people_records::store::RecordStore;
//! use people_records::types::{Gender, Person};
//!
//! let store = RecordStore::new(vec![
//!     Person::new(5436, "Tea", "Håkansson", NaiveDate::from_ymd_opt(1968, 1, 25), Gender::Female),
//!     Person::new(5914, "Otto", "Andersson", NaiveDate::from_ymd_opt(2012, 12, 19), Gender::Male),
//!     Person::new(17, "Maja", "Andersson", None, Gender::Female),
//! ]);
//!
//! assert_eq!(store.find_by_id(5436).map(|p| p.first_name.as_str()), Some("Tea"));
//! assert_eq!(store.find_by_last_name("andersson").len(), 2);
//! assert_eq!(
//!     store.birth_date_display(5914).as_deref(),
//!     Some("WEDNESDAY 19 DECEMBER 2012")
//! );
//!
//! // Reference dates are explicit; people without a birth date are skipped.
//! let as_of = NaiveDate::from_ymd_opt(2019, 12, 20).unwrap();
//! assert_eq!(store.average_age(as_of), Some((51.0 + 7.0) / 2.0));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: loading people from JSON / CSV, with observer hooks
//! - [`types`]: `Person`, `Gender`, `PersonDto`
//! - [`processing`]: the query functions over `&[Person]`, plus string and calendar helpers
//! - [`store`]: `RecordStore` and the load-once `LazyStore`
//! - [`error`]: error type shared by loading and queries

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod store;
pub mod types;

pub use error::{RecordError, RecordResult};
pub use store::{LazyStore, RecordStore};
