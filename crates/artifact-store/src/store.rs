//! Store Implementation

use crate::artifact::{FeatureMatrixArtifact, WindowTensorArtifact};
use crate::ArtifactError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use trial_ingest::TrialCatalog;

/// Filesystem store for pipeline outputs.
///
/// Binary artifacts are postcard-encoded; the catalog is pretty-printed
/// JSON. File names are fixed so downstream tooling can find them.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Window tensor file name
    pub const WINDOWS_FILE: &'static str = "windows.bin";
    /// Feature matrix file name
    pub const FEATURES_FILE: &'static str = "features.bin";
    /// Trial catalog file name
    pub const CATALOG_FILE: &'static str = "catalog.json";

    /// Open a store rooted at a directory, creating the directory as needed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, ArtifactError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| ArtifactError::Io {
            path: root.clone(),
            source,
        })?;
        info!("artifact store at {}", root.display());
        Ok(Self { root })
    }

    /// Full path of a file inside the store
    pub fn path_of(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Persist the window tensor. Returns the written path.
    pub fn save_windows(&self, artifact: &WindowTensorArtifact) -> Result<PathBuf, ArtifactError> {
        let path = self.path_of(Self::WINDOWS_FILE);
        let bytes = postcard::to_allocvec(artifact)?;
        self.write(&path, &bytes)?;
        Ok(path)
    }

    /// Load a previously saved window tensor.
    pub fn load_windows(&self) -> Result<WindowTensorArtifact, ArtifactError> {
        let bytes = self.read(&self.path_of(Self::WINDOWS_FILE))?;
        Ok(postcard::from_bytes(&bytes)?)
    }

    /// Persist the feature matrix. Returns the written path.
    pub fn save_features(&self, artifact: &FeatureMatrixArtifact) -> Result<PathBuf, ArtifactError> {
        let path = self.path_of(Self::FEATURES_FILE);
        let bytes = postcard::to_allocvec(artifact)?;
        self.write(&path, &bytes)?;
        Ok(path)
    }

    /// Load a previously saved feature matrix.
    pub fn load_features(&self) -> Result<FeatureMatrixArtifact, ArtifactError> {
        let bytes = self.read(&self.path_of(Self::FEATURES_FILE))?;
        Ok(postcard::from_bytes(&bytes)?)
    }

    /// Persist the trial catalog as JSON. Returns the written path.
    pub fn save_catalog(&self, catalog: &TrialCatalog) -> Result<PathBuf, ArtifactError> {
        let path = self.path_of(Self::CATALOG_FILE);
        let bytes = serde_json::to_vec_pretty(catalog)?;
        self.write(&path, &bytes)?;
        Ok(path)
    }

    /// Load a previously saved trial catalog.
    pub fn load_catalog(&self) -> Result<TrialCatalog, ArtifactError> {
        let bytes = self.read(&self.path_of(Self::CATALOG_FILE))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ArtifactError> {
        fs::write(path, bytes).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, ArtifactError> {
        fs::read(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};
    use trial_ingest::{CatalogRecord, SubjectId};

    fn window_artifact() -> WindowTensorArtifact {
        WindowTensorArtifact {
            x: Array3::from_shape_fn((2, 4, 3), |(w, s, c)| (w * 12 + s * 3 + c) as f32 * 0.5),
            subjects: vec!["CT1".to_string(), "PD2".to_string()],
        }
    }

    #[test]
    fn test_window_tensor_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::create(dir.path()).unwrap();

        let saved = window_artifact();
        let path = store.save_windows(&saved).unwrap();
        assert!(path.ends_with(ArtifactStore::WINDOWS_FILE));

        let loaded = store.load_windows().unwrap();
        assert_eq!(loaded.x, saved.x);
        assert_eq!(loaded.subjects, saved.subjects);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_feature_matrix_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::create(dir.path()).unwrap();

        let saved = FeatureMatrixArtifact {
            x: Array2::from_shape_fn((3, 8), |(i, j)| (i * 8 + j) as f32),
            names: (0..8).map(|j| format!("axis0_f{j}")).collect(),
            subjects: vec!["CT1".into(), "CT1".into(), "PD2".into()],
            labels: vec![0, 0, 1],
        };
        store.save_features(&saved).unwrap();

        let loaded = store.load_features().unwrap();
        assert_eq!(loaded.x, saved.x);
        assert_eq!(loaded.names, saved.names);
        assert_eq!(loaded.labels, vec![0, 0, 1]);
    }

    #[test]
    fn test_catalog_round_trip_is_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::create(dir.path()).unwrap();

        let mut catalog = TrialCatalog::new();
        let subject = SubjectId::parse("PD7").unwrap();
        catalog.push(CatalogRecord {
            label: subject.label(),
            subject,
            activity: "walk".to_string(),
            source_table: "PD7/walk.csv".to_string(),
            windows: 3,
        });
        store.save_catalog(&catalog).unwrap();

        // Subject ids serialize as plain strings in the JSON
        let raw = std::fs::read_to_string(store.path_of(ArtifactStore::CATALOG_FILE)).unwrap();
        assert!(raw.contains("\"subject\": \"PD7\""));
        assert!(raw.contains("\"label\": 1"));

        let loaded = store.load_catalog().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.records[0].windows, 3);
        assert_eq!(loaded.records[0].subject.as_str(), "PD7");
    }

    #[test]
    fn test_missing_artifact_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::create(dir.path()).unwrap();
        assert!(matches!(
            store.load_windows().unwrap_err(),
            ArtifactError::Io { .. }
        ));
    }

    #[test]
    fn test_create_nested_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/processed");
        let store = ArtifactStore::create(&nested).unwrap();
        store.save_windows(&window_artifact()).unwrap();
        assert!(nested.join(ArtifactStore::WINDOWS_FILE).exists());
    }
}
