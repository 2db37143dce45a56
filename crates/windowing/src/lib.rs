//! Window Segmentation
//!
//! Splits filtered recordings into fixed-length overlapping windows and
//! accumulates them into one tensor across trials. Windows never cross
//! trial boundaries and the trailing partial window is dropped.

mod accumulate;
mod error;
mod segment;

pub use accumulate::{WindowAccumulator, WindowTensor};
pub use error::WindowError;
pub use segment::{segment_windows, window_count, WindowConfig};
