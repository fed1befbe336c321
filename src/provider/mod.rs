//! Data providers: decoded audio behind a uniform access contract.
//!
//! A provider loads an audio file once, keeps the full decoded mix, and hands
//! out either that mix or the part of it inside an analysis window. What the
//! mix looks like is decided by the [`MixSource`]:
//!
//! - [`RawAudioProvider`] returns a flat mono `Vec<f32>`.
//! - [`SignalAudioProvider`] returns an [`AudioSignal`](crate::AudioSignal)
//!   whose `audio_data` is shaped (channels × samples).
//! - [`BaseProvider`] has no mix initialization and cannot be constructed.
//!
//! ```no_run
//! use wavewin::RawAudioProvider;
//!
//! let mut provider = RawAudioProvider::new("speech.wav")?;
//! provider.set_analysis_window(32_000, 16_000)?;
//! assert_eq!(provider.get_mix().len(), 16_000);
//! # Ok::<(), wavewin::Error>(())
//! ```

mod raw;
mod signal;
mod source;
mod window;

pub use raw::RawAudio;
pub use signal::SignalAudio;
pub use source::{MixSource, Unimplemented};
pub use window::AnalysisWindow;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::audio;
use crate::config::ProviderConfig;
use crate::error::Result;

/// Provider without a mix initialization.
pub type BaseProvider = DataProvider<Unimplemented>;

/// Provider handing out a flat mono waveform.
pub type RawAudioProvider = DataProvider<RawAudio>;

/// Provider handing out a wrapped multi-channel signal.
pub type SignalAudioProvider = DataProvider<SignalAudio>;

/// Audio file, its decoded mix, and an optional analysis window.
#[derive(Debug, Clone)]
pub struct DataProvider<S: MixSource> {
    audio_path: PathBuf,
    source: S,
    original_mix: S::Mix,
    window: Option<AnalysisWindow>,
}

impl<S: MixSource> DataProvider<S> {
    /// Load `audio_path` with default provider settings.
    pub fn new(audio_path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(audio_path, &ProviderConfig::default())
    }

    /// Load `audio_path` with the given provider settings.
    pub fn with_config(audio_path: impl Into<PathBuf>, config: &ProviderConfig) -> Result<Self> {
        Self::with_source(audio_path, S::from_config(config))
    }

    /// Load `audio_path` through an already configured source.
    pub fn with_source(audio_path: impl Into<PathBuf>, source: S) -> Result<Self> {
        let audio_path = audio_path.into();
        let original_mix = source.initialize_mix(&audio_path)?;
        debug!(
            "{} ready for {} ({} samples)",
            S::NAME,
            audio_path.display(),
            S::mix_len(&original_mix)
        );
        Ok(Self {
            audio_path,
            source,
            original_mix,
            window: None,
        })
    }

    /// Path the provider was constructed with.
    pub fn get_audio_path(&self) -> &Path {
        &self.audio_path
    }

    /// The mix inside the analysis window, or the whole mix if none is set.
    ///
    /// Unwindowed mixes are borrowed; windowed ones are copied out of the
    /// original on each call.
    pub fn get_mix(&self) -> Cow<'_, S::Mix> {
        match self.window {
            None => Cow::Borrowed(&self.original_mix),
            Some(window) => Cow::Owned(S::window_mix(&self.original_mix, window.range())),
        }
    }

    /// Restrict [`get_mix`](Self::get_mix) to `[start, start + length)`.
    ///
    /// Fails without touching the current window if `length` is zero or the
    /// window reaches past the end of the original mix.
    pub fn set_analysis_window(&mut self, start: usize, length: usize) -> Result<()> {
        let window = AnalysisWindow::new(start, length)?;
        window.check_bounds(self.num_samples())?;
        debug!("{}: analysis window set to {:?}", S::NAME, window.range());
        self.window = Some(window);
        Ok(())
    }

    /// Remove the analysis window.
    pub fn clear_analysis_window(&mut self) {
        if self.window.take().is_some() {
            debug!("{}: analysis window cleared", S::NAME);
        }
    }

    /// Current analysis window, if any.
    pub fn analysis_window(&self) -> Option<AnalysisWindow> {
        self.window
    }

    /// The full decoded mix, regardless of the analysis window.
    pub fn original_mix(&self) -> &S::Mix {
        &self.original_mix
    }

    /// Number of samples (per channel) in the original mix.
    pub fn num_samples(&self) -> usize {
        S::mix_len(&self.original_mix)
    }

    /// Sample rate of the mix in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.source.sample_rate()
    }

    /// Source this provider loads through.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Write the current mix (windowed if a window is set) as 32-bit float WAV.
    pub fn write_mix(&self, path: &Path) -> Result<()> {
        let mix = self.get_mix();
        audio::write_wav_file(path, S::as_channels(&mix), self.sample_rate())
    }
}
