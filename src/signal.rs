//! Multi-channel signal container.
//!
//! [`AudioSignal`] is the wrapped representation handed out by
//! [`SignalAudioProvider`](crate::provider::SignalAudioProvider): the samples
//! live in `audio_data`, shaped (channels × samples), next to the sample rate
//! and the file they came from.

use std::ops::Range;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2, ArrayView1, Axis, s};

use crate::audio::{self, DecodedAudio};
use crate::error::{Error, Result};

/// Audio samples with their sample rate and origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    /// Samples shaped (channels × samples).
    pub audio_data: Array2<f32>,
    sample_rate: u32,
    path: Option<PathBuf>,
}

impl AudioSignal {
    /// Wrap a (channels × samples) array.
    pub fn new(audio_data: Array2<f32>, sample_rate: u32) -> Self {
        Self {
            audio_data,
            sample_rate,
            path: None,
        }
    }

    /// Build a signal from one vector per channel.
    ///
    /// All channels must have the same length.
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        let rows = channels.len();
        let cols = channels.first().map_or(0, Vec::len);
        if let Some(bad) = channels.iter().position(|c| c.len() != cols) {
            return Err(Error::ShapeMismatch {
                reason: format!(
                    "channel {bad} has {} samples, expected {cols}",
                    channels[bad].len()
                ),
            });
        }

        let flat: Vec<f32> = channels.into_iter().flatten().collect();
        let audio_data =
            Array2::from_shape_vec((rows, cols), flat).map_err(|e| Error::ShapeMismatch {
                reason: e.to_string(),
            })?;
        Ok(Self::new(audio_data, sample_rate))
    }

    /// Decode a file into a signal at `sample_rate`.
    pub fn from_file(path: &Path, sample_rate: u32, mono: bool) -> Result<Self> {
        let decoded = audio::load_audio(path, sample_rate, mono)?;
        let mut signal = Self::try_from(decoded)?;
        signal.path = Some(path.to_path_buf());
        Ok(signal)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// File the signal was decoded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.audio_data.nrows()
    }

    /// Number of samples per channel.
    pub fn signal_length(&self) -> usize {
        self.audio_data.ncols()
    }

    /// Duration in seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn signal_duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.signal_length() as f64 / f64::from(self.sample_rate)
    }

    /// Samples of one channel, or `None` if out of range.
    pub fn channel(&self, index: usize) -> Option<ArrayView1<'_, f32>> {
        (index < self.num_channels()).then(|| self.audio_data.row(index))
    }

    /// Average of all channels as a single-channel signal.
    pub fn to_mono(&self) -> Self {
        let mono = DecodedAudio::from(self).into_mono();
        self.make_copy_with_audio_data(Array1::from(mono).insert_axis(Axis(0)))
    }

    /// Copy of this signal's metadata carrying new sample data.
    pub fn make_copy_with_audio_data(&self, audio_data: Array2<f32>) -> Self {
        Self {
            audio_data,
            sample_rate: self.sample_rate,
            path: self.path.clone(),
        }
    }

    /// Copy restricted to a sample range, applied to every channel.
    ///
    /// The caller guarantees `range.end <= self.signal_length()`.
    pub fn slice_samples(&self, range: Range<usize>) -> Self {
        let window = self.audio_data.slice(s![.., range]).to_owned();
        self.make_copy_with_audio_data(window)
    }

    /// Write the signal to `path` as 32-bit float WAV.
    pub fn write_audio_to_file(&self, path: &Path) -> Result<()> {
        audio::write_wav_file(path, self.audio_data.view(), self.sample_rate)
    }
}

impl TryFrom<DecodedAudio> for AudioSignal {
    type Error = Error;

    fn try_from(decoded: DecodedAudio) -> Result<Self> {
        Self::from_channels(decoded.channels, decoded.sample_rate)
    }
}

impl From<&AudioSignal> for DecodedAudio {
    fn from(signal: &AudioSignal) -> Self {
        Self {
            channels: signal.audio_data.rows().into_iter().map(|row| row.to_vec()).collect(),
            sample_rate: signal.sample_rate,
        }
    }
}
