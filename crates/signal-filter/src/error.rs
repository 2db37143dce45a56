//! Filter Error Types

use thiserror::Error;

/// Errors from filter construction and application
#[derive(Debug, Clone, Error)]
pub enum FilterError {
    /// Band edges are not ordered
    #[error("band edges {low_hz} Hz and {high_hz} Hz are not ordered 0 < low < high")]
    BandEdges { low_hz: f64, high_hz: f64 },

    /// Sample rate cannot represent the band
    #[error("sample rate {sample_rate_hz} Hz is too low for a {high_hz} Hz band edge (Nyquist limit)")]
    SampleRate { sample_rate_hz: f64, high_hz: f64 },

    /// Filter order below one
    #[error("filter order must be at least 1, got {0}")]
    Order(usize),

    /// Design produced no usable second-order sections
    #[error("band-pass design produced no second-order sections")]
    Design,

    /// Signal too short for the forward-backward pass
    #[error("signal of {samples} samples is too short for zero-phase filtering (needs at least {min_samples})")]
    TooShort { samples: usize, min_samples: usize },
}
