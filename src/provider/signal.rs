//! Wrapped signal provider.

use std::ops::Range;
use std::path::Path;

use ndarray::ArrayView2;
use tracing::debug;

use super::MixSource;
use crate::config::ProviderConfig;
use crate::constants::DEFAULT_SAMPLE_RATE;
use crate::error::Result;
use crate::signal::AudioSignal;

/// Decodes to an [`AudioSignal`], keeping channels unless `mono` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalAudio {
    sample_rate: u32,
    mono: bool,
}

impl SignalAudio {
    /// Source decoding to `sample_rate`.
    pub fn new(sample_rate: u32, mono: bool) -> Self {
        Self { sample_rate, mono }
    }
}

impl Default for SignalAudio {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE, false)
    }
}

impl MixSource for SignalAudio {
    type Mix = AudioSignal;

    const NAME: &'static str = "SignalAudioProvider";

    fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.sample_rate, config.mono)
    }

    fn initialize_mix(&self, audio_path: &Path) -> Result<Self::Mix> {
        let signal = AudioSignal::from_file(audio_path, self.sample_rate, self.mono)?;
        debug!(
            "{} loaded {} channel(s) x {} samples from {}",
            Self::NAME,
            signal.num_channels(),
            signal.signal_length(),
            audio_path.display()
        );
        Ok(signal)
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn mix_len(mix: &Self::Mix) -> usize {
        mix.signal_length()
    }

    fn window_mix(mix: &Self::Mix, range: Range<usize>) -> Self::Mix {
        mix.slice_samples(range)
    }

    fn as_channels(mix: &Self::Mix) -> ArrayView2<'_, f32> {
        mix.audio_data.view()
    }
}
