//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which loads a person source file into a
//! `Vec<Person>`.
//!
//! - If [`IngestionOptions::format`] is `None`, the ingestion format is inferred from the file
//!   extension.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{RecordError, RecordResult};
use crate::types::Person;

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, json};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array-of-objects or NDJSON.
    Json,
}

impl IngestionFormat {
    /// Parse an ingestion format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<IngestionFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load person records from a file.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use people_records::ingestion::{ingest_from_path, IngestionOptions, TracingObserver};
///
/// # fn main() -> Result<(), people_records::RecordError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let people = ingest_from_path("people.json", &opts)?;
/// println!("people={}", people.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> RecordResult<Vec<Person>> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    tracing::debug!(format = ?fmt, path = %path.display(), "loading people");
    let result = match fmt {
        IngestionFormat::Csv => csv::ingest_csv_from_path(path),
        IngestionFormat::Json => json::ingest_json_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(people) => obs.on_success(&ctx, stats_for(people)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn stats_for(people: &[Person]) -> IngestionStats {
    IngestionStats {
        rows: people.len(),
        missing_birth_dates: people.iter().filter(|p| p.date_of_birth.is_none()).count(),
    }
}

fn severity_for_error(e: &RecordError) -> IngestionSeverity {
    match e {
        RecordError::Io(_) => IngestionSeverity::Critical,
        RecordError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        RecordError::SchemaMismatch { .. }
        | RecordError::ParseError { .. }
        | RecordError::MissingBirthDate { .. } => IngestionSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> RecordResult<IngestionFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| RecordError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    IngestionFormat::from_extension(ext).ok_or_else(|| RecordError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{infer_format_from_path, severity_for_error, IngestionFormat};
    use crate::error::RecordError;
    use crate::ingestion::observability::IngestionSeverity;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(IngestionFormat::from_extension("JSON"), Some(IngestionFormat::Json));
        assert_eq!(IngestionFormat::from_extension("ndjson"), Some(IngestionFormat::Json));
        assert_eq!(IngestionFormat::from_extension("Csv"), Some(IngestionFormat::Csv));
        assert_eq!(IngestionFormat::from_extension("parquet"), None);
    }

    #[test]
    fn infer_format_requires_extension() {
        let err = infer_format_from_path(Path::new("people")).unwrap_err();
        assert!(err.to_string().contains("has no extension"));
        let err = infer_format_from_path(Path::new("people.xml")).unwrap_err();
        assert!(err.to_string().contains("extension 'xml'"));
    }

    #[test]
    fn unreadable_file_is_critical_and_bad_records_are_errors() {
        let io = RecordError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(severity_for_error(&io), IngestionSeverity::Critical);

        let missing = RecordError::MissingBirthDate { person_id: 6 };
        assert_eq!(severity_for_error(&missing), IngestionSeverity::Error);
        let schema = RecordError::SchemaMismatch {
            message: "empty input".to_string(),
        };
        assert_eq!(severity_for_error(&schema), IngestionSeverity::Error);
    }
}
