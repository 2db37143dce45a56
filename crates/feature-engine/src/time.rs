//! Time-Domain Features

use crate::block::FeatureBlock;
use ndarray::{s, Array2, ArrayView1, ArrayView3};
use tracing::debug;

/// Time-domain statistics of one window of one axis
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeStats {
    /// Root mean square
    pub rms: f64,
    /// Population variance
    pub variance: f64,
    /// Fraction of consecutive sample pairs with a strict sign flip
    pub zero_crossing_rate: f64,
    /// Mean absolute first difference
    pub mean_abs_diff: f64,
}

impl TimeStats {
    /// Compute all four statistics in one pass over a window.
    ///
    /// A pair counts as a zero crossing only when the product of its samples
    /// is strictly negative, so a zero-valued sample ends no crossing on
    /// either side.
    pub fn compute(signal: ArrayView1<f32>) -> Self {
        let n = signal.len();
        if n == 0 {
            return Self::default();
        }
        let n_f = n as f64;
        let mean = signal.iter().map(|&v| f64::from(v)).sum::<f64>() / n_f;

        let mut sum_sq = 0.0;
        let mut dev_sq = 0.0;
        let mut flips = 0usize;
        let mut abs_diff = 0.0;
        let mut prev = 0.0f64;
        for (i, &value) in signal.iter().enumerate() {
            let v = f64::from(value);
            sum_sq += v * v;
            let dev = v - mean;
            dev_sq += dev * dev;
            if i > 0 {
                if prev * v < 0.0 {
                    flips += 1;
                }
                abs_diff += (v - prev).abs();
            }
            prev = v;
        }

        let pairs = (n_f - 1.0).max(1.0);
        Self {
            rms: (sum_sq / n_f).sqrt(),
            variance: dev_sq / n_f,
            zero_crossing_rate: flips as f64 / pairs,
            mean_abs_diff: abs_diff / pairs,
        }
    }
}

/// Builds the time-domain feature block
pub struct TimeDomainExtractor;

impl TimeDomainExtractor {
    /// Feature columns produced per axis
    pub const FEATURES_PER_AXIS: usize = 4;

    /// Extract the time block from a windows x samples x channels tensor.
    ///
    /// Columns are axis-major: the four statistics of axis 0 first, then
    /// axis 1, and so on.
    pub fn extract(windows: ArrayView3<f32>) -> FeatureBlock {
        let (count, _, channels) = windows.dim();
        let mut values = Array2::<f32>::zeros((count, channels * Self::FEATURES_PER_AXIS));
        for w in 0..count {
            for axis in 0..channels {
                let stats = TimeStats::compute(windows.slice(s![w, .., axis]));
                let col = axis * Self::FEATURES_PER_AXIS;
                values[[w, col]] = stats.rms as f32;
                values[[w, col + 1]] = stats.variance as f32;
                values[[w, col + 2]] = stats.zero_crossing_rate as f32;
                values[[w, col + 3]] = stats.mean_abs_diff as f32;
            }
        }
        debug!("time block: {} windows x {} features", count, values.ncols());
        FeatureBlock {
            values,
            names: Self::feature_names(channels),
        }
    }

    /// Column names matching `extract`'s layout
    pub fn feature_names(channels: usize) -> Vec<String> {
        let mut names = Vec::with_capacity(channels * Self::FEATURES_PER_AXIS);
        for axis in 0..channels {
            for stat in ["rms", "var", "zcr", "jerk"] {
                names.push(format!("axis{axis}_{stat}"));
            }
        }
        names
    }
}
