//! Batch Orchestration

use crate::config::PipelineConfig;
use crate::error::{EmptyResultError, PipelineError};
use crate::report::{RunSummary, SkipReason, SkipRecord};
use artifact_store::{ArtifactStore, FeatureMatrixArtifact, WindowTensorArtifact};
use chrono::Utc;
use feature_engine::{assemble, SpectralExtractor, TimeDomainExtractor};
use signal_filter::{BandPassFilter, FilterError};
use tracing::{info, warn};
use trial_ingest::{
    discover_trials, read_trial_table, CatalogRecord, SubjectId, Trial, TrialCatalog, TrialMeta,
    CHANNEL_COUNT,
};
use windowing::WindowAccumulator;

/// Batch pipeline from raw trials to persisted feature artifacts.
///
/// One call to [`Pipeline::run`] performs the whole pass: discovery,
/// per-trial filtering and segmentation, feature extraction, persistence.
/// Trials are processed one at a time in discovery order; the run either
/// completes or stops at the first fatal error.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the full batch and report what happened.
    pub fn run(&self) -> Result<RunSummary, PipelineError> {
        let started_at = Utc::now();
        let config = &self.config;

        let sources = discover_trials(&config.dataset_root)?;
        info!(
            "discovered {} trials under {}",
            sources.len(),
            config.dataset_root.display()
        );

        let filter = BandPassFilter::new(&config.filter, config.sample_rate_hz)?;
        let mut accumulator = WindowAccumulator::new(config.window, CHANNEL_COUNT)?;
        let mut catalog = TrialCatalog::new();
        let mut skips: Vec<SkipRecord> = Vec::new();

        for source in &sources {
            let subject = match SubjectId::parse(&source.subject_dir) {
                Ok(subject) => subject,
                Err(error) => {
                    warn!("skipping {}/{}: {}", source.subject_dir, source.activity, error);
                    skips.push(SkipRecord {
                        subject_dir: source.subject_dir.clone(),
                        activity: source.activity.clone(),
                        reason: SkipReason::InvalidSubject,
                    });
                    continue;
                }
            };

            let trial = Trial {
                meta: TrialMeta {
                    subject,
                    activity: source.activity.clone(),
                    sample_rate_hz: config.sample_rate_hz,
                    source: source.path.clone(),
                },
                samples: read_trial_table(&source.path)?,
            };

            let filtered = match filter.apply(&trial.samples) {
                Ok(filtered) => filtered,
                Err(FilterError::TooShort { samples, min_samples }) => {
                    warn!(
                        "skipping {}/{}: {} samples, zero-phase filtering needs {}",
                        source.subject_dir, source.activity, samples, min_samples
                    );
                    skips.push(SkipRecord {
                        subject_dir: source.subject_dir.clone(),
                        activity: source.activity.clone(),
                        reason: SkipReason::TooShortForFilter,
                    });
                    continue;
                }
                Err(error) => return Err(error.into()),
            };

            let windows = accumulator.push_trial(filtered.view(), &trial.meta.subject)?;
            if windows == 0 {
                warn!(
                    "skipping {}/{}: {} samples is shorter than one window",
                    source.subject_dir,
                    source.activity,
                    trial.sample_count()
                );
                skips.push(SkipRecord {
                    subject_dir: source.subject_dir.clone(),
                    activity: source.activity.clone(),
                    reason: SkipReason::TooFewSamples,
                });
                continue;
            }

            info!("{}/{}: {} windows", trial.meta.subject, trial.meta.activity, windows);
            catalog.push(CatalogRecord {
                subject: trial.meta.subject.clone(),
                label: trial.meta.subject.label(),
                activity: trial.meta.activity.clone(),
                source_table: trial.meta.source.display().to_string(),
                windows,
            });
        }

        let tensor = accumulator.finish()?;
        if tensor.is_empty() {
            return Err(EmptyResultError {
                trials_seen: sources.len(),
                trials_skipped: skips.len(),
            }
            .into());
        }

        let subjects: Vec<String> = tensor.subjects.iter().map(|s| s.as_str().to_string()).collect();
        let labels: Vec<u8> = tensor.subjects.iter().map(|s| s.label()).collect();
        let windows_artifact = WindowTensorArtifact {
            x: tensor.x,
            subjects: subjects.clone(),
        };

        let store = ArtifactStore::create(&config.artifact_root)?;
        let windows_path = store.save_windows(&windows_artifact)?;
        info!(
            "wrote {} windows to {}",
            windows_artifact.len(),
            windows_path.display()
        );

        let time_block = TimeDomainExtractor::extract(windows_artifact.x.view());
        let mut spectral = SpectralExtractor::new(config.sample_rate_hz);
        let frequency_block = spectral.extract(windows_artifact.x.view());
        let features = assemble(&time_block, &frequency_block)?;
        let feature_shape = (features.rows(), features.cols());

        let features_artifact = FeatureMatrixArtifact {
            x: features.values,
            names: features.names,
            subjects,
            labels,
        };
        let features_path = store.save_features(&features_artifact)?;
        info!(
            "wrote {}x{} feature matrix to {}",
            feature_shape.0,
            feature_shape.1,
            features_path.display()
        );
        store.save_catalog(&catalog)?;

        let summary = RunSummary {
            trials_discovered: sources.len(),
            trials_used: catalog.len(),
            skips,
            windows: windows_artifact.len(),
            feature_shape,
            started_at,
            finished_at: Utc::now(),
        };
        info!("run complete: {}", summary);
        Ok(summary)
    }
}
