use thiserror::Error;

/// Convenience result type for loading and querying person records.
pub type RecordResult<T> = Result<T, RecordError>;

/// Error type returned by ingestion functions and by the few store operations that can fail.
///
/// Lookups that find nothing are not errors; they return `None` or an empty container.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not have the shape of a person record source (missing fields/columns,
    /// empty input, unknown format, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be converted into the corresponding [`crate::types::Person`] field.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// An age was requested for a person whose birth date is unknown.
    #[error("person {person_id} has no birth date")]
    MissingBirthDate { person_id: i32 },
}
