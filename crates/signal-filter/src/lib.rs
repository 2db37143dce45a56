//! Signal Conditioning
//!
//! Removes linear drift from raw IMU channels and applies a zero-phase
//! Butterworth band-pass so window features see only the motion band.

mod bandpass;
mod detrend;
mod error;

pub use bandpass::{BandPassFilter, FilterConfig};
pub use detrend::detrend_linear;
pub use error::FilterError;
