//! Cross-Trial Accumulation

use crate::error::WindowError;
use crate::segment::{segment_windows, WindowConfig};
use ndarray::{Array3, ArrayView2, Axis};
use tracing::debug;
use trial_ingest::SubjectId;

/// All windows of one run plus the subject of each window.
///
/// Entry i of `subjects` tags window i of `x`. Order is trial encounter
/// order, then window order within each trial.
#[derive(Debug, Clone)]
pub struct WindowTensor {
    /// Windows x samples x channels
    pub x: Array3<f32>,
    /// Subject of each window, index-aligned with `x`
    pub subjects: Vec<SubjectId>,
}

impl WindowTensor {
    /// Number of windows
    pub fn len(&self) -> usize {
        self.x.shape()[0]
    }

    /// True when no trial contributed a window
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects windows from consecutive trials into one tensor.
///
/// Each trial is segmented independently, so windows never span two trials.
pub struct WindowAccumulator {
    config: WindowConfig,
    channels: usize,
    chunks: Vec<Array3<f32>>,
    subjects: Vec<SubjectId>,
}

impl WindowAccumulator {
    /// Create an accumulator for a fixed channel count.
    pub fn new(config: WindowConfig, channels: usize) -> Result<Self, WindowError> {
        if config.size < 2 {
            return Err(WindowError::Size(config.size));
        }
        if config.hop == 0 {
            return Err(WindowError::ZeroHop);
        }
        Ok(Self {
            config,
            channels,
            chunks: Vec::new(),
            subjects: Vec::new(),
        })
    }

    /// Segment one trial and append its windows.
    ///
    /// Returns how many windows the trial contributed; zero when the
    /// recording is shorter than one window. Every appended window is
    /// tagged with the trial's subject.
    pub fn push_trial(
        &mut self,
        signal: ArrayView2<f32>,
        subject: &SubjectId,
    ) -> Result<usize, WindowError> {
        if signal.ncols() != self.channels {
            return Err(WindowError::ChannelMismatch {
                expected: self.channels,
                got: signal.ncols(),
            });
        }

        let windows = segment_windows(signal, &self.config);
        let count = windows.shape()[0];
        if count == 0 {
            return Ok(0);
        }

        for _ in 0..count {
            self.subjects.push(subject.clone());
        }
        self.chunks.push(windows);
        Ok(count)
    }

    /// Windows accumulated so far
    pub fn window_count(&self) -> usize {
        self.subjects.len()
    }

    /// Build the final tensor. May be empty when no trial contributed.
    ///
    /// Fails with [`WindowError::ChunkMismatch`] if the accumulated chunks
    /// no longer share one window shape. That is an internal inconsistency
    /// and must not pass as an empty result.
    pub fn finish(self) -> Result<WindowTensor, WindowError> {
        if self.chunks.is_empty() {
            return Ok(WindowTensor {
                x: Array3::zeros((0, self.config.size, self.channels)),
                subjects: Vec::new(),
            });
        }

        let views: Vec<_> = self.chunks.iter().map(|c| c.view()).collect();
        // Chunks share one shape: size fixed by config, channels checked per trial
        let x = ndarray::concatenate(Axis(0), &views).map_err(|_| WindowError::ChunkMismatch)?;
        debug!("accumulated {} windows across {} trials", x.shape()[0], self.chunks.len());
        Ok(WindowTensor {
            x,
            subjects: self.subjects,
        })
    }
}
