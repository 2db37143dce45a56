//! Trial Ingestion
//!
//! Discovers raw IMU trials on disk, validates subject identifiers, and
//! loads per-trial channel tables into arrays.

mod catalog;
mod discover;
mod error;
mod subject;
mod table;
mod trial;

pub use catalog::{CatalogRecord, TrialCatalog};
pub use discover::{discover_trials, TrialSource};
pub use error::{DiscoveryError, TableError, ValidationError};
pub use subject::{Cohort, SubjectId};
pub use table::read_trial_table;
pub use trial::{Trial, TrialMeta, CHANNEL_COUNT, CHANNEL_NAMES};
