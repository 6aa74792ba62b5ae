//! Deterministic synthetic spectra for rendering without an audio source.

/// A spectral peak with a Gaussian profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Peak {
    /// Center frequency in Hz
    pub(crate) freq: f64,
    /// Level at the center in dB
    pub(crate) level_db: f64,
    /// Half-width at 1/e of the power, in Hz
    pub(crate) width_hz: f64,
}

impl Peak {
    pub(crate) const fn new(freq: f64, level_db: f64, width_hz: f64) -> Self {
        Self {
            freq,
            level_db,
            width_hz,
        }
    }
}

/// Noise floor in dB before ripple.
pub(crate) const NOISE_FLOOR_DB: f64 = -130.0;

/// Peaks for a single still frame.
pub(crate) fn still_peaks(nyquist: f64) -> Vec<Peak> {
    vec![
        Peak::new(440.0, -40.0, 60.0),
        Peak::new(1_000.0, -55.0, 80.0),
        Peak::new(nyquist * 0.2, -70.0, 200.0),
        Peak::new(nyquist * 0.5, -85.0, 400.0),
    ]
}

/// A single peak sweeping from low to high frequency over `count` frames.
pub(crate) fn sweep_peak(nyquist: f64, frame: usize, count: usize) -> Peak {
    let t = if count > 1 {
        frame as f64 / (count - 1) as f64
    } else {
        0.0
    };
    Peak::new(nyquist * 0.9f64.mul_add(t, 0.05), -45.0, nyquist * 0.01)
}

/// Level in dB at every frequency in `hz`.
///
/// Peak powers add to the floor power, so overlapping peaks combine the way
/// real partials do. The floor carries a small fixed ripple so frames look
/// like measured data while staying reproducible.
pub(crate) fn spectrum_db(hz: &[f64], peaks: &[Peak]) -> Vec<f64> {
    hz.iter()
        .enumerate()
        .map(|(i, &f)| {
            let ripple = 3.0 * (i as f64 * 0.37).sin() + 1.5 * (i as f64 * 0.051).cos();
            let mut power = db_to_power(NOISE_FLOOR_DB + ripple);
            for peak in peaks {
                let d = (f - peak.freq) / peak.width_hz;
                power += db_to_power(peak.level_db) * (-d * d).exp();
            }
            10.0 * power.log10()
        })
        .collect()
}

fn db_to_power(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectrum_is_deterministic() {
        let hz: Vec<f64> = (0..256).map(|i| f64::from(i) * 93.75).collect();
        let peaks = still_peaks(24_000.0);
        assert_eq!(spectrum_db(&hz, &peaks), spectrum_db(&hz, &peaks));
    }

    #[test]
    fn test_peak_rises_above_floor() {
        let hz = [0.0, 440.0, 10_000.0];
        let db = spectrum_db(&hz, &[Peak::new(440.0, -40.0, 50.0)]);
        assert!((db[1] - -40.0).abs() < 0.1);
        assert!(db[2] < -120.0);
    }

    #[test]
    fn test_sweep_moves_upward() {
        let first = sweep_peak(24_000.0, 0, 10);
        let last = sweep_peak(24_000.0, 9, 10);
        assert!((first.freq - 1_200.0).abs() < 1e-9);
        assert!((last.freq - 22_800.0).abs() < 1e-9);
        assert_eq!(sweep_peak(24_000.0, 0, 1).freq, first.freq);
    }
}
