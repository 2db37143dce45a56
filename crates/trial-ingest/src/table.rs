//! Channel Table Reader

use crate::error::TableError;
use crate::trial::{CHANNEL_COUNT, CHANNEL_NAMES};
use ndarray::Array2;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Read the calibrated channel columns of one trial table.
///
/// The table is a headered CSV. Only the six `Cal*` columns are read, in
/// fixed order; any other columns (timestamps, raw counts) are ignored.
/// Returns samples x channels.
pub fn read_trial_table(path: &Path) -> Result<Array2<f32>, TableError> {
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| TableError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut columns = [0usize; CHANNEL_COUNT];
    for (slot, name) in columns.iter_mut().zip(CHANNEL_NAMES) {
        *slot = headers.iter().position(|h| h == name).ok_or_else(|| {
            TableError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            }
        })?;
    }

    let mut rows: Vec<[f32; CHANNEL_COUNT]> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| TableError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut sample = [0.0f32; CHANNEL_COUNT];
        for (channel, &column) in columns.iter().enumerate() {
            let field = record.get(column).unwrap_or("");
            sample[channel] = field.parse().map_err(|_| TableError::BadValue {
                path: path.to_path_buf(),
                row: index + 1,
                column: CHANNEL_NAMES[channel],
                value: field.to_string(),
            })?;
        }
        rows.push(sample);
    }

    debug!(
        "read {} samples x {} channels from {}",
        rows.len(),
        CHANNEL_COUNT,
        path.display()
    );
    Ok(Array2::from(rows))
}
