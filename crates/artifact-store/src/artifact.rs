//! Artifact Payloads

use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

/// Persisted window tensor with per-window subject tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowTensorArtifact {
    /// Windows x samples x channels
    pub x: Array3<f32>,
    /// Subject of each window, index-aligned with `x`
    pub subjects: Vec<String>,
}

/// Persisted feature matrix with column names and per-row labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureMatrixArtifact {
    /// Windows x features
    pub x: Array2<f32>,
    /// Feature column names
    pub names: Vec<String>,
    /// Subject of each row
    pub subjects: Vec<String>,
    /// Cohort label of each row (1 = patient)
    pub labels: Vec<u8>,
}

impl WindowTensorArtifact {
    /// Number of windows
    pub fn len(&self) -> usize {
        self.x.shape()[0]
    }

    /// True when the tensor holds no windows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FeatureMatrixArtifact {
    /// Number of feature rows
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    /// True when the matrix holds no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
