//! The mix initialization seam shared by every provider.

use std::ops::Range;
use std::path::Path;

use ndarray::ArrayView2;

use crate::config::ProviderConfig;
use crate::error::{Error, Result};

/// Loads and slices one representation of an audio file.
///
/// A [`DataProvider`](super::DataProvider) owns the path, the loaded mix and
/// the analysis window; the source decides what the mix is and how it is
/// produced and cut.
pub trait MixSource {
    /// In-memory representation of the audio.
    type Mix: Clone;

    /// Provider name used in logs and errors.
    const NAME: &'static str;

    /// Build the source from provider settings.
    fn from_config(config: &ProviderConfig) -> Self
    where
        Self: Sized;

    /// Load the full mix for `audio_path`.
    fn initialize_mix(&self, audio_path: &Path) -> Result<Self::Mix>;

    /// Sample rate of mixes produced by this source.
    fn sample_rate(&self) -> u32;

    /// Number of samples (per channel) in `mix`.
    fn mix_len(mix: &Self::Mix) -> usize;

    /// Copy of `mix` restricted to `range`, which lies within `mix_len(mix)`.
    fn window_mix(mix: &Self::Mix, range: Range<usize>) -> Self::Mix;

    /// The mix as a (channels × samples) view.
    fn as_channels(mix: &Self::Mix) -> ArrayView2<'_, f32>;
}

/// Base source without a mix initialization. Constructing a provider over it
/// always fails with [`Error::MixNotImplemented`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unimplemented;

impl MixSource for Unimplemented {
    type Mix = Vec<f32>;

    const NAME: &'static str = "DataProvider";

    fn from_config(_config: &ProviderConfig) -> Self {
        Self
    }

    fn initialize_mix(&self, _audio_path: &Path) -> Result<Self::Mix> {
        Err(Error::MixNotImplemented {
            provider: Self::NAME,
        })
    }

    fn sample_rate(&self) -> u32 {
        0
    }

    fn mix_len(mix: &Self::Mix) -> usize {
        mix.len()
    }

    fn window_mix(mix: &Self::Mix, range: Range<usize>) -> Self::Mix {
        mix[range].to_vec()
    }

    fn as_channels(mix: &Self::Mix) -> ArrayView2<'_, f32> {
        super::raw::mono_view(mix)
    }
}
