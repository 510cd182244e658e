use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::RecordError;

use super::unified::IngestionFormat;

/// How badly a people load failed. Ordered so alert thresholds can compare with `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// The file was readable but its records were malformed.
    Error,
    /// The file could not be read at all.
    Critical,
}

/// The people file a load attempt is reading.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    pub path: PathBuf,
    /// Resolved format (explicit or inferred from the extension).
    pub format: IngestionFormat,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of loaded person records.
    pub rows: usize,
    /// How many of those records have no birth date.
    pub missing_birth_dates: usize,
}

/// Receives the outcome of each people load.
pub trait IngestionObserver: Send + Sync {
    /// Called once the people collection has been built.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when no people collection could be built from the file.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &RecordError) {}

    /// Called after [`Self::on_failure`] when `severity` meets the configured alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &RecordError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &RecordError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &RecordError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Emits load events through `tracing`.
///
/// Failures log at `warn` (or `error` for [`IngestionSeverity::Critical`]); alerts always log at
/// `error`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::info!(
            format = ?ctx.format,
            path = %ctx.path.display(),
            rows = stats.rows,
            missing_birth_dates = stats.missing_birth_dates,
            "people loaded"
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &RecordError) {
        if severity >= IngestionSeverity::Critical {
            tracing::error!(?severity, format = ?ctx.format, path = %ctx.path.display(), %error, "people load failed");
        } else {
            tracing::warn!(?severity, format = ?ctx.format, path = %ctx.path.display(), %error, "people load failed");
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &RecordError) {
        tracing::error!(
            alert = true,
            ?severity,
            format = ?ctx.format,
            path = %ctx.path.display(),
            %error,
            "people load failed"
        );
    }
}
