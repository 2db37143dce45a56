//! Ingestion Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while locating trial tables under the dataset root
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Dataset root missing or not a directory
    #[error("dataset root {} does not exist or is not a directory", .0.display())]
    RootMissing(PathBuf),

    /// The walk finished without finding a single trial table
    #[error("no trial tables found under {}", .0.display())]
    NoTrials(PathBuf),

    /// Filesystem failure during the walk
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors validating a subject identifier
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Identifier does not match the cohort naming scheme
    #[error("subject id {0:?} does not match CT or PD followed by 1-3 digits")]
    InvalidSubjectId(String),
}

/// Errors reading a per-trial channel table
#[derive(Debug, Error)]
pub enum TableError {
    /// Could not open the table file
    #[error("failed to open {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content
    #[error("{}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required calibrated channel column is absent
    #[error("{}: missing channel column {column}", .path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },

    /// A cell could not be parsed as a sample value
    #[error("{}: row {row}, column {column}: cannot parse {value:?}", .path.display())]
    BadValue {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },
}
