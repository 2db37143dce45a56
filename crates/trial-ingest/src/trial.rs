//! Trial Data Model

use crate::subject::SubjectId;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of calibrated IMU channels per trial
pub const CHANNEL_COUNT: usize = 6;

/// Column headers of the calibrated channels, in fixed order
pub const CHANNEL_NAMES: [&str; CHANNEL_COUNT] = ["Cal1", "Cal2", "Cal3", "Cal4", "Cal5", "Cal6"];

/// Metadata attached to a trial at ingestion and carried through all stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialMeta {
    /// Validated subject identifier
    pub subject: SubjectId,
    /// Activity name, taken from the table file stem
    pub activity: String,
    /// Sampling rate of the recording (Hz)
    pub sample_rate_hz: f64,
    /// Table the samples were loaded from
    pub source: PathBuf,
}

/// One continuous recording of one activity by one subject
#[derive(Debug, Clone)]
pub struct Trial {
    /// Ingestion metadata
    pub meta: TrialMeta,
    /// Samples x channels, channel order fixed as in [`CHANNEL_NAMES`]
    pub samples: Array2<f32>,
}

impl Trial {
    /// Number of samples in the recording
    pub fn sample_count(&self) -> usize {
        self.samples.nrows()
    }
}
