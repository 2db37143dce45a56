//! Zero-Phase Band-Pass Filter

use crate::detrend::detrend_linear;
use crate::error::FilterError;
use ndarray::Array2;
use sci_rs::signal::filter::design::{
    butter_dyn, DigitalFilter, FilterBandType, FilterOutputType, Sos, SosFormatFilter,
};
use sci_rs::signal::filter::sosfiltfilt_dyn;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Band-pass design parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Low cutoff (Hz)
    pub low_hz: f64,
    /// High cutoff (Hz)
    pub high_hz: f64,
    /// Butterworth order
    pub order: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            low_hz: 0.5,
            high_hz: 20.0,
            order: 2,
        }
    }
}

/// Zero-phase Butterworth band-pass over sample-major channel arrays.
///
/// Each channel is linearly detrended, then filtered forward and backward
/// through the cascaded second-order sections so the output has no phase
/// delay. Designed once per run and reused across all trials.
pub struct BandPassFilter {
    sos: Vec<Sos<f64>>,
    padlen: usize,
}

impl BandPassFilter {
    /// Design the filter for a sample rate.
    pub fn new(config: &FilterConfig, sample_rate_hz: f64) -> Result<Self, FilterError> {
        if config.order < 1 {
            return Err(FilterError::Order(config.order));
        }
        if !(config.low_hz > 0.0 && config.low_hz < config.high_hz) {
            return Err(FilterError::BandEdges {
                low_hz: config.low_hz,
                high_hz: config.high_hz,
            });
        }
        let nyquist = sample_rate_hz / 2.0;
        if !sample_rate_hz.is_finite() || config.high_hz >= nyquist {
            return Err(FilterError::SampleRate {
                sample_rate_hz,
                high_hz: config.high_hz,
            });
        }

        let design = butter_dyn(
            config.order,
            vec![config.low_hz, config.high_hz],
            Some(FilterBandType::Bandpass),
            Some(false),
            Some(FilterOutputType::Sos),
            Some(sample_rate_hz),
        );
        let DigitalFilter::Sos(SosFormatFilter { sos }) = design else {
            return Err(FilterError::Design);
        };
        if sos.is_empty() {
            return Err(FilterError::Design);
        }

        // Forward-backward edge padding, as in the reference sosfiltfilt
        let padlen = 3 * (2 * sos.len() + 1);
        debug!(
            sections = sos.len(),
            padlen, "designed band-pass {}..{} Hz", config.low_hz, config.high_hz
        );
        Ok(Self { sos, padlen })
    }

    /// Shortest signal `apply` accepts
    pub fn min_samples(&self) -> usize {
        self.padlen + 1
    }

    /// Detrend and filter every channel of a samples x channels array.
    ///
    /// Returns a new array of the same shape; the input is left untouched.
    /// Signals shorter than [`Self::min_samples`] cannot be edge-padded and
    /// fail with [`FilterError::TooShort`].
    pub fn apply(&self, signal: &Array2<f32>) -> Result<Array2<f32>, FilterError> {
        let samples = signal.nrows();
        if samples < self.min_samples() {
            return Err(FilterError::TooShort {
                samples,
                min_samples: self.min_samples(),
            });
        }

        let mut out = Array2::<f32>::zeros(signal.raw_dim());
        let mut channel = vec![0.0f64; samples];
        for (index, column) in signal.columns().into_iter().enumerate() {
            for (slot, &value) in channel.iter_mut().zip(column.iter()) {
                *slot = f64::from(value);
            }
            detrend_linear(&mut channel);
            let filtered: Vec<f64> = sosfiltfilt_dyn(channel.iter(), &self.sos);
            for (row, value) in filtered.into_iter().enumerate() {
                out[[row, index]] = value as f32;
            }
        }
        Ok(out)
    }
}
