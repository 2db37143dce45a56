//! IMU Screening Pipeline
//!
//! Batch pipeline turning raw wearable IMU trials into windowed tensors and
//! a per-window feature matrix for downstream screening models. The stages
//! are band-pass filtering, strided window segmentation, and time/frequency
//! feature extraction; artifacts land in an [`artifact_store::ArtifactStore`].

mod config;
mod error;
mod report;
mod run;

pub use config::PipelineConfig;
pub use error::{EmptyResultError, PipelineError};
pub use report::{RunSummary, SkipReason, SkipRecord};
pub use run::Pipeline;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
