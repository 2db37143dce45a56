//! Windowing Error Types

use thiserror::Error;

/// Errors from window configuration and accumulation
#[derive(Debug, Clone, Error)]
pub enum WindowError {
    /// Window too small for the per-window statistics
    #[error("window size must be at least 2 samples, got {0}")]
    Size(usize),

    /// Hop of zero would never advance
    #[error("window hop must be at least 1 sample")]
    ZeroHop,

    /// A trial disagreed with the accumulator's channel count
    #[error("trial has {got} channels, accumulator expects {expected}")]
    ChannelMismatch { expected: usize, got: usize },

    /// Accumulated chunks no longer share one window shape
    #[error("accumulated window chunks disagree on shape")]
    ChunkMismatch,
}
