//! Trial Catalog

use crate::subject::SubjectId;
use serde::{Deserialize, Serialize};

/// One catalog row describing a trial that contributed windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Subject the trial belongs to
    pub subject: SubjectId,
    /// Classifier label derived from the cohort (1 = patient)
    pub label: u8,
    /// Activity name
    pub activity: String,
    /// Table the trial was loaded from
    pub source_table: String,
    /// Number of windows the trial contributed
    pub windows: usize,
}

/// Ordered collection of catalog records for one run.
///
/// Records appear in trial encounter order, matching row order in the
/// window and feature artifacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrialCatalog {
    /// Catalog rows
    pub records: Vec<CatalogRecord>,
}

impl TrialCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn push(&mut self, record: CatalogRecord) {
        self.records.push(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no trial contributed
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total windows across all records
    pub fn total_windows(&self) -> usize {
        self.records.iter().map(|r| r.windows).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_accumulates_in_order() {
        let mut catalog = TrialCatalog::new();
        assert!(catalog.is_empty());

        for (subject, windows) in [("CT1", 3), ("PD2", 5)] {
            let subject = SubjectId::parse(subject).unwrap();
            catalog.push(CatalogRecord {
                label: subject.label(),
                subject,
                activity: "walk".to_string(),
                source_table: "walk.csv".to_string(),
                windows,
            });
        }

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.total_windows(), 8);
        assert_eq!(catalog.records[0].subject.as_str(), "CT1");
        assert_eq!(catalog.records[0].label, 0);
        assert_eq!(catalog.records[1].label, 1);
    }
}
