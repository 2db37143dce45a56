//! Linear Detrending

/// Remove the least-squares straight-line fit from a signal in place.
///
/// Fits y = a + b*t over the sample index t and subtracts the fit, so both
/// constant offset and linear drift are gone afterwards.
pub fn detrend_linear(signal: &mut [f64]) {
    let n = signal.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        // A single sample is fitted exactly
        signal[0] = 0.0;
        return;
    }

    let n_f = n as f64;
    let t_mean = (n_f - 1.0) / 2.0;
    let y_mean = signal.iter().sum::<f64>() / n_f;

    let mut ty_sum = 0.0;
    for (i, &y) in signal.iter().enumerate() {
        ty_sum += (i as f64 - t_mean) * (y - y_mean);
    }
    // Sum of squared index deviations over 0..n-1 in closed form
    let tt_sum = n_f * (n_f * n_f - 1.0) / 12.0;
    let slope = ty_sum / tt_sum;
    let intercept = y_mean - slope * t_mean;

    for (i, y) in signal.iter_mut().enumerate() {
        *y -= intercept + slope * i as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_line_exactly() {
        let mut signal: Vec<f64> = (0..100).map(|i| 3.0 + 0.25 * i as f64).collect();
        detrend_linear(&mut signal);
        for v in signal {
            assert!(v.abs() < 1e-9, "residual {v}");
        }
    }

    #[test]
    fn test_removes_offset_and_drift_around_oscillation() {
        let mut signal: Vec<f64> = (0..200)
            .map(|i| (i as f64 * 0.3).sin() + 10.0 - 0.02 * i as f64)
            .collect();
        detrend_linear(&mut signal);
        let mean = signal.iter().sum::<f64>() / signal.len() as f64;
        assert!(mean.abs() < 1e-9, "mean {mean}");
    }

    #[test]
    fn test_short_signals() {
        let mut empty: Vec<f64> = vec![];
        detrend_linear(&mut empty);

        let mut single = vec![5.0];
        detrend_linear(&mut single);
        assert_eq!(single, vec![0.0]);

        let mut pair = vec![1.0, 3.0];
        detrend_linear(&mut pair);
        assert!(pair[0].abs() < 1e-12 && pair[1].abs() < 1e-12);
    }
}
