//! Pipeline Error Types

use thiserror::Error;

/// The run finished with zero usable windows
#[derive(Debug, Clone, Error)]
#[error("no usable windows: {trials_seen} trials seen, {trials_skipped} skipped")]
pub struct EmptyResultError {
    /// Trials discovery produced
    pub trials_seen: usize,
    /// Trials dropped along the way
    pub trials_skipped: usize,
}

/// Fatal pipeline failure.
///
/// Per-trial problems (invalid subject directory, recording too short) are
/// downgraded to skip records and never surface here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Dataset discovery failed
    #[error("discovery: {0}")]
    Discovery(#[from] trial_ingest::DiscoveryError),

    /// A trial table was unreadable or corrupt
    #[error("trial table: {0}")]
    Table(#[from] trial_ingest::TableError),

    /// The filter rejected the configuration
    #[error("filter design: {0}")]
    Filter(#[from] signal_filter::FilterError),

    /// The window settings were rejected, or accumulated windows lost
    /// shape agreement
    #[error("windowing: {0}")]
    Window(#[from] windowing::WindowError),

    /// Feature blocks disagreed on shape
    #[error("feature assembly: {0}")]
    Shape(#[from] feature_engine::ShapeMismatchError),

    /// Zero windows across the whole dataset
    #[error("{0}")]
    Empty(#[from] EmptyResultError),

    /// Artifact persistence failed
    #[error("artifacts: {0}")]
    Artifact(#[from] artifact_store::ArtifactError),

    /// Configuration file was invalid
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
}
