//! Feature Engineering Engine
//!
//! Turns a tensor of fixed-length IMU windows into per-window time and
//! frequency domain feature blocks and assembles them into one matrix.

mod block;
mod spectral;
mod time;

pub use block::{assemble, FeatureBlock, ShapeMismatchError};
pub use spectral::{SpectralExtractor, SpectralStats};
pub use time::{TimeDomainExtractor, TimeStats};
