//! Strided Segmentation

use ndarray::{s, Array3, ArrayView2};
use serde::{Deserialize, Serialize};

/// Window segmentation parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Samples per window
    pub size: usize,
    /// Stride between consecutive window starts
    pub hop: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { size: 256, hop: 128 }
    }
}

impl WindowConfig {
    /// Samples shared by consecutive windows
    pub fn overlap(&self) -> usize {
        self.size.saturating_sub(self.hop)
    }
}

/// Number of full windows a recording of `samples` yields.
///
/// Window k starts at k*hop; the last start is the largest k with
/// k*hop + size <= samples. Recordings shorter than one window yield zero.
pub fn window_count(samples: usize, config: &WindowConfig) -> usize {
    if samples < config.size || config.hop == 0 {
        0
    } else {
        (samples - config.size) / config.hop + 1
    }
}

/// Copy every full window of one recording into an owned tensor.
///
/// Returns windows x size x channels. Windows are copies, so the input can
/// be dropped as soon as this returns.
pub fn segment_windows(signal: ArrayView2<f32>, config: &WindowConfig) -> Array3<f32> {
    let count = window_count(signal.nrows(), config);
    let channels = signal.ncols();
    let mut windows = Array3::<f32>::zeros((count, config.size, channels));
    for k in 0..count {
        let start = k * config.hop;
        windows
            .slice_mut(s![k, .., ..])
            .assign(&signal.slice(s![start..start + config.size, ..]));
    }
    windows
}
