//! Run Reporting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a trial contributed no windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Directory name failed subject validation
    InvalidSubject,
    /// Recording shorter than the zero-phase filter padding
    TooShortForFilter,
    /// Recording shorter than one window
    TooFewSamples,
}

/// One skipped trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkipRecord {
    /// Subject directory name as found on disk
    pub subject_dir: String,
    /// Activity (table file stem)
    pub activity: String,
    /// Why the trial was dropped
    pub reason: SkipReason,
}

/// Outcome of a completed run.
///
/// Skips are collected as data rather than printed, so callers and tests
/// can assert on exactly what was dropped and why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Trials found by discovery
    pub trials_discovered: usize,
    /// Trials contributing at least one window
    pub trials_used: usize,
    /// Trials dropped, in encounter order
    pub skips: Vec<SkipRecord>,
    /// Total windows in the tensor
    pub windows: usize,
    /// Feature matrix rows x columns
    pub feature_shape: (usize, usize),
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run finished
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// Number of skipped trials with the given reason
    pub fn skipped(&self, reason: SkipReason) -> usize {
        self.skips.iter().filter(|s| s.reason == reason).count()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trials discovered, {} used, {} skipped; {} windows; feature matrix {}x{}",
            self.trials_discovered,
            self.trials_used,
            self.skips.len(),
            self.windows,
            self.feature_shape.0,
            self.feature_shape.1,
        )
    }
}
