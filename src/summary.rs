//! Level statistics for a mix.

use ndarray::ArrayView2;

use crate::provider::{DataProvider, MixSource};

const EPSILON: f32 = 1e-10;

/// Shape and level of the mix a provider currently hands out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixSummary {
    /// Number of channels.
    pub channels: usize,
    /// Samples per channel.
    pub samples: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Largest absolute sample value.
    pub peak: f32,
    /// Root mean square over all channels.
    pub rms: f32,
}

impl MixSummary {
    /// Summarize a (channels × samples) block.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_channels(audio: ArrayView2<'_, f32>, sample_rate: u32) -> Self {
        let peak = audio.iter().map(|x| x.abs()).fold(0.0_f32, f32::max);
        let rms = if audio.is_empty() {
            0.0
        } else {
            (audio.iter().map(|&x| x * x).sum::<f32>() / audio.len() as f32).sqrt()
        };
        let samples = audio.ncols();
        let duration_secs = if sample_rate == 0 {
            0.0
        } else {
            samples as f64 / f64::from(sample_rate)
        };

        Self {
            channels: audio.nrows(),
            samples,
            sample_rate,
            duration_secs,
            peak,
            rms,
        }
    }

    /// Summarize the current (possibly windowed) mix of a provider.
    pub fn of_provider<S: MixSource>(provider: &DataProvider<S>) -> Self {
        let mix = provider.get_mix();
        Self::from_channels(S::as_channels(&mix), provider.sample_rate())
    }

    /// Peak level in dBFS, `-inf` for silence.
    pub fn peak_db(&self) -> f32 {
        to_db(self.peak)
    }

    /// RMS level in dBFS, `-inf` for silence.
    pub fn rms_db(&self) -> f32 {
        to_db(self.rms)
    }
}

fn to_db(level: f32) -> f32 {
    if level > EPSILON {
        20.0 * level.log10()
    } else {
        f32::NEG_INFINITY
    }
}

impl std::fmt::Display for MixSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} sample(s) x {} channel(s) at {} Hz ({:.3}s), peak {:.2} dBFS, rms {:.2} dBFS",
            self.samples,
            self.channels,
            self.sample_rate,
            self.duration_secs,
            self.peak_db(),
            self.rms_db()
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn test_summary_levels() {
        let audio = array![[0.5_f32, -0.5, 0.5, -0.5]];
        let summary = MixSummary::from_channels(audio.view(), 4);
        assert_eq!(summary.channels, 1);
        assert_eq!(summary.samples, 4);
        assert_eq!(summary.duration_secs, 1.0);
        assert_eq!(summary.peak, 0.5);
        assert!((summary.rms - 0.5).abs() < 1e-6);
        assert!((summary.peak_db() + 6.0206).abs() < 1e-3);
    }

    #[test]
    fn test_summary_of_silence() {
        let audio = Array2::<f32>::zeros((2, 100));
        let summary = MixSummary::from_channels(audio.view(), 16_000);
        assert_eq!(summary.channels, 2);
        assert_eq!(summary.peak_db(), f32::NEG_INFINITY);
        assert_eq!(summary.rms_db(), f32::NEG_INFINITY);
    }

    #[test]
    fn test_summary_of_empty_block() {
        let audio = Array2::<f32>::zeros((1, 0));
        let summary = MixSummary::from_channels(audio.view(), 16_000);
        assert_eq!(summary.samples, 0);
        assert_eq!(summary.rms, 0.0);
    }
}
