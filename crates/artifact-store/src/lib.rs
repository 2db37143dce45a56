//! Artifact Store
//!
//! Persists the pipeline's terminal artifacts on a filesystem root: the
//! window tensor and feature matrix as compact binary files, the trial
//! catalog as JSON for human inspection.

mod artifact;
mod store;

pub use artifact::{FeatureMatrixArtifact, WindowTensorArtifact};
pub use store::ArtifactStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or writing persisted artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Filesystem failure
    #[error("artifact io at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Binary encoding or decoding failure
    #[error("artifact codec: {0}")]
    Codec(#[from] postcard::Error),

    /// Catalog JSON failure
    #[error("catalog json: {0}")]
    Json(#[from] serde_json::Error),
}
