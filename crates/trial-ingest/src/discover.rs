//! Dataset Discovery

use crate::error::DiscoveryError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Location of one trial table, as found on disk.
///
/// The subject directory name is carried verbatim; it is only parsed into a
/// [`crate::SubjectId`] when the trial is actually ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSource {
    /// Name of the subject directory
    pub subject_dir: String,
    /// Activity name (file stem of the table)
    pub activity: String,
    /// Full path to the table
    pub path: PathBuf,
}

/// Enumerate trial tables laid out as `dataset_root/{subject}/{activity}.csv`.
///
/// Subject directories, and tables within each directory, are visited in
/// lexicographic order so repeated runs see trials in the same order.
pub fn discover_trials(dataset_root: &Path) -> Result<Vec<TrialSource>, DiscoveryError> {
    if !dataset_root.is_dir() {
        return Err(DiscoveryError::RootMissing(dataset_root.to_path_buf()));
    }

    let mut subject_dirs = Vec::new();
    for entry in read_dir(dataset_root)? {
        let path = entry?.path();
        if path.is_dir() {
            subject_dirs.push(path);
        }
    }
    subject_dirs.sort();

    let mut sources = Vec::new();
    for dir in subject_dirs {
        let Some(subject_dir) = dir.file_name().and_then(|n| n.to_str()) else {
            warn!("skipping {}: directory name is not valid UTF-8", dir.display());
            continue;
        };
        let subject_dir = subject_dir.to_string();

        let mut tables = Vec::new();
        for entry in read_dir(&dir)? {
            let path = entry?.path();
            let is_table = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if is_table {
                tables.push(path);
            }
        }
        tables.sort();

        for path in tables {
            let Some(activity) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("skipping {}: file name is not valid UTF-8", path.display());
                continue;
            };
            sources.push(TrialSource {
                subject_dir: subject_dir.clone(),
                activity: activity.to_string(),
                path,
            });
        }
    }

    if sources.is_empty() {
        return Err(DiscoveryError::NoTrials(dataset_root.to_path_buf()));
    }
    debug!(
        "discovered {} trial tables under {}",
        sources.len(),
        dataset_root.display()
    );
    Ok(sources)
}

fn read_dir(
    path: &Path,
) -> Result<impl Iterator<Item = Result<fs::DirEntry, DiscoveryError>> + '_, DiscoveryError> {
    let entries = fs::read_dir(path).map_err(|source| DiscoveryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(entries.map(move |entry| {
        entry.map_err(|source| DiscoveryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "Cal1,Cal2,Cal3,Cal4,Cal5,Cal6\n").unwrap();
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_trials(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, DiscoveryError::RootMissing(_)));
    }

    #[test]
    fn test_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_trials(dir.path()).unwrap_err();
        assert!(matches!(err, DiscoveryError::NoTrials(_)));
    }

    #[test]
    fn test_sorted_walk() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("PD2/walk.csv"));
        touch(&dir.path().join("CT1/walk.csv"));
        touch(&dir.path().join("CT1/rest.csv"));
        touch(&dir.path().join("CT10/walk.csv"));

        let sources = discover_trials(dir.path()).unwrap();
        let seen: Vec<(&str, &str)> = sources
            .iter()
            .map(|s| (s.subject_dir.as_str(), s.activity.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("CT1", "rest"),
                ("CT1", "walk"),
                ("CT10", "walk"),
                ("PD2", "walk"),
            ]
        );
    }

    #[test]
    fn test_ignores_non_csv_and_loose_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("CT1/walk.csv"));
        fs::write(dir.path().join("CT1/notes.txt"), "x").unwrap();
        fs::write(dir.path().join("stray.csv"), "x").unwrap();

        let sources = discover_trials(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].activity, "walk");
    }

    #[test]
    fn test_keeps_unvalidated_directory_names() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("not-a-subject/walk.csv"));

        let sources = discover_trials(dir.path()).unwrap();
        assert_eq!(sources[0].subject_dir, "not-a-subject");
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("CT1/walk.csv"));

        // A subject directory and an activity stem that are not valid UTF-8
        let bad_dir = dir.path().join(OsStr::from_bytes(b"PD\xff9"));
        fs::create_dir(&bad_dir).unwrap();
        fs::write(bad_dir.join("walk.csv"), "Cal1,Cal2,Cal3,Cal4,Cal5,Cal6\n").unwrap();
        fs::write(
            dir.path().join("CT1").join(OsStr::from_bytes(b"re\xffst.csv")),
            "Cal1,Cal2,Cal3,Cal4,Cal5,Cal6\n",
        )
        .unwrap();

        let sources = discover_trials(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].subject_dir, "CT1");
        assert_eq!(sources[0].activity, "walk");
    }
}
