//! Subject Identifiers

use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Cohort a subject belongs to, parsed from the identifier prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cohort {
    /// Healthy control (CT prefix)
    Control,
    /// Diagnosed patient (PD prefix)
    Patient,
}

/// Validated subject identifier.
///
/// Accepts `CT` or `PD` (case-insensitive) followed by one to three digits
/// and keeps the raw spelling so artifacts round-trip the on-disk name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectId {
    raw: String,
    cohort: Cohort,
}

fn subject_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?i)(CT|PD)[0-9]{1,3}$").expect("subject pattern is a valid regex")
    })
}

impl SubjectId {
    /// Parse and validate a raw identifier.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !subject_pattern().is_match(raw) {
            return Err(ValidationError::InvalidSubjectId(raw.to_string()));
        }
        let cohort = if raw[..2].eq_ignore_ascii_case("PD") {
            Cohort::Patient
        } else {
            Cohort::Control
        };
        Ok(Self {
            raw: raw.to_string(),
            cohort,
        })
    }

    /// Raw spelling as found on disk
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Cohort parsed from the prefix
    pub fn cohort(&self) -> Cohort {
        self.cohort
    }

    /// Classifier label: 1 for patients, 0 for controls
    pub fn label(&self) -> u8 {
        match self.cohort {
            Cohort::Patient => 1,
            Cohort::Control => 0,
        }
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for SubjectId {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for SubjectId {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<SubjectId> for String {
    fn from(id: SubjectId) -> Self {
        id.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_cohorts() {
        assert_eq!(SubjectId::parse("CT1").unwrap().cohort(), Cohort::Control);
        assert_eq!(SubjectId::parse("PD42").unwrap().cohort(), Cohort::Patient);
        assert_eq!(SubjectId::parse("PD123").unwrap().cohort(), Cohort::Patient);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(SubjectId::parse("ct7").unwrap().cohort(), Cohort::Control);
        assert_eq!(SubjectId::parse("pd9").unwrap().cohort(), Cohort::Patient);
        assert_eq!(SubjectId::parse("Pd10").unwrap().label(), 1);
    }

    #[test]
    fn test_preserves_raw_spelling() {
        let id = SubjectId::parse("ct07").unwrap();
        assert_eq!(id.as_str(), "ct07");
        assert_eq!(id.to_string(), "ct07");
    }

    #[test]
    fn test_rejects_malformed_ids() {
        for raw in ["", "CT", "PD", "XX1", "CT1234", "PD1a", "aCT1", "CT-1", "CT 1"] {
            assert!(SubjectId::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(SubjectId::parse("CT12").unwrap().label(), 0);
        assert_eq!(SubjectId::parse("PD12").unwrap().label(), 1);
    }

    #[test]
    fn test_string_round_trip() {
        let id = SubjectId::parse("PD3").unwrap();
        let raw: String = id.clone().into();
        assert_eq!(SubjectId::try_from(raw).unwrap(), id);
    }

    #[test]
    fn test_subject_ids_dedupe_in_hashed_sets() {
        use std::collections::HashSet;

        let subjects: HashSet<SubjectId> = ["PD7", "CT1", "PD7"]
            .iter()
            .map(|raw| SubjectId::parse(raw).unwrap())
            .collect();
        assert_eq!(subjects.len(), 2);
        assert!(subjects.contains(&SubjectId::parse("PD7").unwrap()));
    }
}
