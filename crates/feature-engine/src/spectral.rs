//! Frequency-Domain Features

use crate::block::FeatureBlock;
use ndarray::{s, Array2, ArrayView3};
use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;
use tracing::debug;

/// Frequency-domain statistics of one power spectrum
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralStats {
    /// Frequency of the strongest bin (Hz); earliest bin wins ties
    pub dominant_freq: f64,
    /// Power at the strongest bin
    pub dominant_magnitude: f64,
    /// First frequency where cumulative power reaches half the total (Hz)
    pub median_freq: f64,
    /// Shannon entropy of the normalized spectrum (bits)
    pub entropy: f64,
}

impl SpectralStats {
    /// Compute the statistics of a one-sided power spectrum.
    pub fn from_power_spectrum(psd: &[f64], freq_step_hz: f64) -> Self {
        if psd.is_empty() {
            return Self::default();
        }

        let mut peak = 0usize;
        let mut peak_power = psd[0];
        for (k, &power) in psd.iter().enumerate().skip(1) {
            if power > peak_power {
                peak_power = power;
                peak = k;
            }
        }

        let total: f64 = psd.iter().sum();
        let half = total / 2.0;
        let mut cumulative = 0.0;
        let mut median_bin = psd.len() - 1;
        for (k, &power) in psd.iter().enumerate() {
            cumulative += power;
            if cumulative >= half {
                median_bin = k;
                break;
            }
        }

        Self {
            dominant_freq: peak as f64 * freq_step_hz,
            dominant_magnitude: peak_power,
            median_freq: median_bin as f64 * freq_step_hz,
            entropy: spectral_entropy(psd),
        }
    }
}

/// Shannon entropy (base 2) of a spectrum normalized to a distribution.
///
/// The total carries a small epsilon so a near-zero spectrum cannot divide
/// by zero; a spectrum with no power at all degenerates to the uniform
/// distribution over its bins.
fn spectral_entropy(psd: &[f64]) -> f64 {
    let total: f64 = psd.iter().sum();
    if total <= 0.0 {
        return (psd.len() as f64).log2();
    }
    let norm = total + 1e-12;
    let mut entropy = 0.0;
    for &power in psd {
        let p = power / norm;
        if p > 0.0 {
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Periodic Hann window of a given length
fn periodic_hann(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / len as f64).cos()))
        .collect()
}

/// Per-axis spectral features over fixed windows.
///
/// Each window/axis is turned into a single-segment power spectral density:
/// mean removal, periodic Hann window, forward FFT, one-sided density
/// scaling with every bin except DC and Nyquist doubled. The FFT plan is
/// cached and reused across all windows.
pub struct SpectralExtractor {
    planner: FftPlanner<f64>,
    sample_rate_hz: f64,
}

impl SpectralExtractor {
    /// Feature columns produced per axis
    pub const FEATURES_PER_AXIS: usize = 4;

    /// Create an extractor for a sampling rate.
    pub fn new(sample_rate_hz: f64) -> Self {
        Self {
            planner: FftPlanner::new(),
            sample_rate_hz,
        }
    }

    /// Extract the frequency block from a windows x samples x channels tensor.
    ///
    /// Columns are axis-major: dominant frequency, dominant magnitude,
    /// median frequency, and spectral entropy of axis 0 first, then axis 1,
    /// and so on.
    pub fn extract(&mut self, windows: ArrayView3<f32>) -> FeatureBlock {
        let (count, len, channels) = windows.dim();
        let mut values = Array2::<f32>::zeros((count, channels * Self::FEATURES_PER_AXIS));
        if count == 0 || len == 0 {
            return FeatureBlock {
                values,
                names: Self::feature_names(channels),
            };
        }

        let fft = self.planner.plan_fft_forward(len);
        let mut buffer = vec![Complex::new(0.0f64, 0.0); len];
        let mut scratch = vec![Complex::new(0.0f64, 0.0); fft.get_inplace_scratch_len()];

        let hann = periodic_hann(len);
        let window_power: f64 = hann.iter().map(|w| w * w).sum();
        let scale = 1.0 / (self.sample_rate_hz * window_power);
        let freq_step = self.sample_rate_hz / len as f64;
        let bins = len / 2 + 1;
        let mut psd = vec![0.0f64; bins];

        for w in 0..count {
            for axis in 0..channels {
                let signal = windows.slice(s![w, .., axis]);
                let mean = signal.iter().map(|&v| f64::from(v)).sum::<f64>() / len as f64;
                for ((slot, &sample), coeff) in
                    buffer.iter_mut().zip(signal.iter()).zip(hann.iter())
                {
                    *slot = Complex::new((f64::from(sample) - mean) * coeff, 0.0);
                }
                fft.process_with_scratch(&mut buffer, &mut scratch);

                for (k, slot) in psd.iter_mut().enumerate() {
                    *slot = buffer[k].norm_sqr() * scale;
                }
                // One-sided doubling skips DC, and Nyquist for even lengths
                for (k, slot) in psd.iter_mut().enumerate().skip(1) {
                    if !(len % 2 == 0 && k == bins - 1) {
                        *slot *= 2.0;
                    }
                }

                let stats = SpectralStats::from_power_spectrum(&psd, freq_step);
                let col = axis * Self::FEATURES_PER_AXIS;
                values[[w, col]] = stats.dominant_freq as f32;
                values[[w, col + 1]] = stats.dominant_magnitude as f32;
                values[[w, col + 2]] = stats.median_freq as f32;
                values[[w, col + 3]] = stats.entropy as f32;
            }
        }
        debug!("frequency block: {} windows x {} features", count, values.ncols());
        FeatureBlock {
            values,
            names: Self::feature_names(channels),
        }
    }

    /// Column names matching `extract`'s layout
    pub fn feature_names(channels: usize) -> Vec<String> {
        let mut names = Vec::with_capacity(channels * Self::FEATURES_PER_AXIS);
        for axis in 0..channels {
            for stat in ["domF", "domMag", "medF", "specEnt"] {
                names.push(format!("axis{axis}_{stat}"));
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn tone_tensor(freq_hz: f64, sample_rate_hz: f64, len: usize) -> Array3<f32> {
        Array3::from_shape_fn((1, len, 1), |(_, i, _)| {
            (2.0 * PI * freq_hz * i as f64 / sample_rate_hz).sin() as f32
        })
    }

    #[test]
    fn test_dominant_frequency_of_pure_tone() {
        // Bin-aligned tone: bin 8 of a 256-sample window at 200 Hz is 6.25 Hz
        let mut extractor = SpectralExtractor::new(200.0);
        let block = extractor.extract(tone_tensor(6.25, 200.0, 256).view());
        let dom_f = f64::from(block.values[[0, 0]]);
        assert!((dom_f - 6.25).abs() < 1e-6, "dominant {dom_f}");
        assert!(block.values[[0, 1]] > 0.0);
    }

    #[test]
    fn test_median_frequency_of_pure_tone_is_the_tone() {
        let mut extractor = SpectralExtractor::new(200.0);
        let block = extractor.extract(tone_tensor(6.25, 200.0, 256).view());
        let med_f = f64::from(block.values[[0, 2]]);
        assert!((med_f - 6.25).abs() < 1e-6, "median {med_f}");
    }

    #[test]
    fn test_silent_window_has_uniform_entropy() {
        let mut extractor = SpectralExtractor::new(200.0);
        let silent = Array3::<f32>::zeros((1, 256, 1));
        let block = extractor.extract(silent.view());
        let expected = (129.0f64).log2() as f32;
        assert_eq!(block.values[[0, 3]], expected);
        // Degenerate spectrum also pins the remaining statistics to zero
        assert_eq!(block.values[[0, 0]], 0.0);
        assert_eq!(block.values[[0, 2]], 0.0);
    }

    #[test]
    fn test_pure_tone_entropy_is_low() {
        let mut extractor = SpectralExtractor::new(200.0);
        let block = extractor.extract(tone_tensor(6.25, 200.0, 256).view());
        let uniform = (129.0f64).log2() as f32;
        assert!(block.values[[0, 3]] < uniform / 2.0);
    }

    #[test]
    fn test_first_occurrence_wins_ties() {
        let stats = SpectralStats::from_power_spectrum(&[0.5, 2.0, 2.0, 0.5], 1.0);
        assert_eq!(stats.dominant_freq, 1.0);
        assert_eq!(stats.dominant_magnitude, 2.0);
    }

    #[test]
    fn test_median_bin_on_known_spectrum() {
        // Cumulative power [1, 3, 4]; half of 4 is reached at bin 1
        let stats = SpectralStats::from_power_spectrum(&[1.0, 2.0, 1.0], 0.5);
        assert_eq!(stats.median_freq, 0.5);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let tensor = Array3::from_shape_fn((3, 256, 2), |(w, i, c)| {
            ((w * 3 + c + 1) as f64 * 0.37 * i as f64 / 200.0).sin() as f32
                + 0.1 * ((i * (c + 2)) as f32).cos()
        });
        let mut extractor = SpectralExtractor::new(200.0);
        let first = extractor.extract(tensor.view());
        let second = extractor.extract(tensor.view());
        assert_eq!(first.values, second.values);
        assert_eq!(first.names, second.names);
    }

    #[test]
    fn test_names_and_shape() {
        let mut extractor = SpectralExtractor::new(200.0);
        let tensor = Array3::<f32>::zeros((2, 64, 6));
        let block = extractor.extract(tensor.view());
        assert_eq!(block.values.dim(), (2, 24));
        assert_eq!(block.names[0], "axis0_domF");
        assert_eq!(block.names[3], "axis0_specEnt");
        assert_eq!(block.names[23], "axis5_specEnt");
    }
}
