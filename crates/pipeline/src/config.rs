//! Pipeline Configuration

use serde::{Deserialize, Serialize};
use signal_filter::FilterConfig;
use std::path::PathBuf;
use windowing::WindowConfig;

/// Top-level configuration for one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Root directory of raw trials, laid out as {subject}/{activity}.csv
    pub dataset_root: PathBuf,
    /// Directory artifacts are written to
    pub artifact_root: PathBuf,
    /// Recording sample rate (Hz)
    pub sample_rate_hz: f64,
    /// Band-pass settings
    pub filter: FilterConfig,
    /// Window segmentation settings
    pub window: WindowConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dataset_root: PathBuf::from("data/raw"),
            artifact_root: PathBuf::from("data/processed"),
            sample_rate_hz: 200.0,
            filter: FilterConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a file, merged over the defaults.
    ///
    /// Any key absent from the file keeps its default, so a file can set
    /// just the dataset paths and leave the signal settings alone.
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::with_name(path))
            .build()?;
        settings.try_deserialize()
    }
}
