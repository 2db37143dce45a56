//! Feature Blocks and Assembly

use ndarray::{Array2, Axis};
use thiserror::Error;

/// A block of per-window features with one name per column
#[derive(Debug, Clone)]
pub struct FeatureBlock {
    /// Windows x features
    pub values: Array2<f32>,
    /// Column names; `names[j]` describes column j
    pub names: Vec<String>,
}

impl FeatureBlock {
    /// Number of windows (rows)
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of feature columns
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }
}

/// Two feature blocks disagree on window count
#[derive(Debug, Clone, Error)]
#[error("feature blocks disagree on window count: {left} vs {right} rows")]
pub struct ShapeMismatchError {
    /// Rows in the first block
    pub left: usize,
    /// Rows in the second block
    pub right: usize,
}

/// Concatenate the time block and the frequency block column-wise.
///
/// The time block comes first, then the frequency block, and the names
/// follow the same order. Row i of the result still describes window i.
pub fn assemble(
    time: &FeatureBlock,
    frequency: &FeatureBlock,
) -> Result<FeatureBlock, ShapeMismatchError> {
    if time.rows() != frequency.rows() {
        return Err(ShapeMismatchError {
            left: time.rows(),
            right: frequency.rows(),
        });
    }

    let values = ndarray::concatenate(Axis(1), &[time.values.view(), frequency.values.view()])
        .map_err(|_| ShapeMismatchError {
            left: time.rows(),
            right: frequency.rows(),
        })?;

    let mut names = Vec::with_capacity(time.names.len() + frequency.names.len());
    names.extend(time.names.iter().cloned());
    names.extend(frequency.names.iter().cloned());

    Ok(FeatureBlock { values, names })
}
