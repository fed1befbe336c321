//! Flat waveform provider.

use std::ops::Range;
use std::path::Path;

use ndarray::{ArrayView2, Axis, aview1};
use tracing::debug;

use super::MixSource;
use crate::audio;
use crate::config::ProviderConfig;
use crate::constants::DEFAULT_SAMPLE_RATE;
use crate::error::Result;

/// Decodes to a mono `Vec<f32>` at a fixed sample rate.
///
/// Multi-channel files are averaged down to one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAudio {
    sample_rate: u32,
}

impl RawAudio {
    /// Source decoding to `sample_rate`.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }
}

impl Default for RawAudio {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl MixSource for RawAudio {
    type Mix = Vec<f32>;

    const NAME: &'static str = "RawAudioProvider";

    fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.sample_rate)
    }

    fn initialize_mix(&self, audio_path: &Path) -> Result<Self::Mix> {
        let decoded = audio::load_audio(audio_path, self.sample_rate, true)?;
        let waveform = decoded.into_mono();
        debug!(
            "{} loaded {} samples from {}",
            Self::NAME,
            waveform.len(),
            audio_path.display()
        );
        Ok(waveform)
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn mix_len(mix: &Self::Mix) -> usize {
        mix.len()
    }

    fn window_mix(mix: &Self::Mix, range: Range<usize>) -> Self::Mix {
        mix[range].to_vec()
    }

    fn as_channels(mix: &Self::Mix) -> ArrayView2<'_, f32> {
        mono_view(mix)
    }
}

/// View a flat waveform as a single-row (1 × samples) array.
pub(super) fn mono_view(samples: &[f32]) -> ArrayView2<'_, f32> {
    aview1(samples).insert_axis(Axis(0))
}
