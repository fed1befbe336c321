//! Audio decoding using symphonia.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::conv::IntoSample;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;
use tracing::{debug, warn};

/// Decoded audio data, one plane per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Samples per channel as f32 in range [-1.0, 1.0]. All planes have equal length.
    pub channels: Vec<Vec<f32>>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples in each channel.
    pub fn num_frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Duration in seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / f64::from(self.sample_rate)
    }

    /// Average all channels into a single plane.
    pub fn into_mono(self) -> Vec<f32> {
        let count = self.channels.len();
        let mut planes = self.channels.into_iter();
        let Some(mut mono) = planes.next() else {
            return Vec::new();
        };
        if count == 1 {
            return mono;
        }

        for plane in planes {
            for (acc, sample) in mono.iter_mut().zip(plane) {
                *acc += sample;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let scale = 1.0 / count as f32;
        for sample in &mut mono {
            *sample *= scale;
        }
        mono
    }

    /// Single-channel copy holding the average of all channels.
    pub fn mixed_down(self) -> Self {
        let sample_rate = self.sample_rate;
        Self {
            channels: vec![self.into_mono()],
            sample_rate,
        }
    }

    /// Resample every channel to `to_rate`.
    pub fn resample_to(self, to_rate: u32) -> Result<Self> {
        if self.sample_rate == to_rate {
            return Ok(self);
        }
        let channels = super::resample_channels(self.channels, self.sample_rate, to_rate)?;
        Ok(Self {
            channels,
            sample_rate: to_rate,
        })
    }
}

/// Decode an audio file, keeping every channel at the file's native rate.
///
/// Supports WAV, FLAC, MP3, AAC and Ogg Vorbis.
pub fn decode_audio_file(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode {
            path: path.to_path_buf(),
            source: "missing sample rate".into(),
        })?;
    let channel_count = track
        .codec_params
        .channels
        .map_or(1, symphonia::core::audio::Channels::count);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut planes = vec![Vec::new(); channel_count];

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => append_planes(&decoded, &mut planes),
            // A corrupt packet is skipped; the rest of the stream is still usable.
            Err(SymphoniaError::DecodeError(reason)) => {
                warn!("Skipping undecodable packet in {}: {reason}", path.display());
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        }
    }

    let audio = DecodedAudio {
        channels: planes,
        sample_rate,
    };
    debug!(
        "Decoded {}: {} channel(s), {} frames at {} Hz",
        path.display(),
        audio.num_channels(),
        audio.num_frames(),
        sample_rate
    );
    Ok(audio)
}

/// Decode a file and bring it to `sample_rate`, optionally mixed down to one channel.
///
/// Mixdown happens before resampling so only one plane goes through the resampler.
pub fn load_audio(path: &Path, sample_rate: u32, mono: bool) -> Result<DecodedAudio> {
    let mut decoded = decode_audio_file(path)?;
    if mono && decoded.num_channels() > 1 {
        debug!(
            "Mixing {} channels down to mono for {}",
            decoded.num_channels(),
            path.display()
        );
        decoded = decoded.mixed_down();
    }
    let decoded = decoded.resample_to(sample_rate)?;
    debug!(
        "Loaded {} ({:.3}s at {} Hz)",
        path.display(),
        decoded.duration_secs(),
        decoded.sample_rate
    );
    Ok(decoded)
}

/// Append every channel of a decoded packet to the matching output plane.
fn append_planes(buffer: &AudioBufferRef<'_>, planes: &mut [Vec<f32>]) {
    match buffer {
        AudioBufferRef::U8(buf) => extend_planes(buf, planes),
        AudioBufferRef::U16(buf) => extend_planes(buf, planes),
        AudioBufferRef::U24(buf) => extend_planes(buf, planes),
        AudioBufferRef::U32(buf) => extend_planes(buf, planes),
        AudioBufferRef::S8(buf) => extend_planes(buf, planes),
        AudioBufferRef::S16(buf) => extend_planes(buf, planes),
        AudioBufferRef::S24(buf) => extend_planes(buf, planes),
        AudioBufferRef::S32(buf) => extend_planes(buf, planes),
        AudioBufferRef::F32(buf) => extend_planes(buf, planes),
        AudioBufferRef::F64(buf) => extend_planes(buf, planes),
    }
}

fn extend_planes<S>(buf: &AudioBuffer<S>, planes: &mut [Vec<f32>])
where
    S: Sample + IntoSample<f32>,
{
    let available = buf.spec().channels.count();
    for (ch, plane) in planes.iter_mut().enumerate().take(available) {
        plane.extend(buf.chan(ch).iter().map(|&s| s.into_sample()));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec, WavWriter};
    use tempfile::NamedTempFile;

    fn write_stereo_wav(left: &[f32], right: &[f32], sample_rate: u32) -> NamedTempFile {
        let file = NamedTempFile::with_suffix(".wav").unwrap();
        let spec = WavSpec {
            channels: 2,
            sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(file.path(), spec).unwrap();
        for (&l, &r) in left.iter().zip(right) {
            writer.write_sample(l).unwrap();
            writer.write_sample(r).unwrap();
        }
        writer.finalize().unwrap();
        file
    }

    #[test]
    fn test_into_mono_averages_channels() {
        let audio = DecodedAudio {
            channels: vec![vec![1.0, 0.0, -0.5], vec![0.0, 0.5, -0.5]],
            sample_rate: 8000,
        };
        assert_eq!(audio.into_mono(), vec![0.5, 0.25, -0.5]);
    }

    #[test]
    fn test_into_mono_empty() {
        let audio = DecodedAudio {
            channels: Vec::new(),
            sample_rate: 8000,
        };
        assert!(audio.into_mono().is_empty());
    }

    #[test]
    fn test_duration_secs() {
        let audio = DecodedAudio {
            channels: vec![vec![0.0; 24_000]],
            sample_rate: 16_000,
        };
        assert_eq!(audio.duration_secs(), 1.5);
    }

    #[test]
    fn test_decode_keeps_channels() {
        let left: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.01).sin() * 0.5).collect();
        let right: Vec<f32> = left.iter().map(|s| -s).collect();
        let file = write_stereo_wav(&left, &right, 16_000);

        let audio = decode_audio_file(file.path()).unwrap();
        assert_eq!(audio.sample_rate, 16_000);
        assert_eq!(audio.num_channels(), 2);
        assert_eq!(audio.num_frames(), 1000);
        assert_eq!(audio.channels[0], left);
        assert_eq!(audio.channels[1], right);
    }

    #[test]
    fn test_load_audio_mono_mixdown() {
        let left = vec![0.5_f32; 256];
        let right = vec![-0.5_f32; 256];
        let file = write_stereo_wav(&left, &right, 16_000);

        let audio = load_audio(file.path(), 16_000, true).unwrap();
        assert_eq!(audio.num_channels(), 1);
        assert!(audio.channels[0].iter().all(|s| s.abs() < 1e-6));
    }

    #[test]
    fn test_load_audio_mixes_down_before_resampling() {
        let left = vec![0.25_f32; 3_200];
        let right = vec![0.75_f32; 3_200];
        let file = write_stereo_wav(&left, &right, 32_000);

        let audio = load_audio(file.path(), 16_000, true).unwrap();
        assert_eq!(audio.num_channels(), 1);
        assert_eq!(audio.sample_rate, 16_000);
        assert_eq!(audio.num_frames(), 1_600);
        // Constant 0.5 survives resampling away from the edges.
        assert!(audio.channels[0][200..1_400].iter().all(|s| (s - 0.5).abs() < 1e-2));
    }

    #[test]
    fn test_mixed_down_keeps_rate() {
        let audio = DecodedAudio {
            channels: vec![vec![1.0, 1.0], vec![0.0, -1.0]],
            sample_rate: 22_050,
        }
        .mixed_down();
        assert_eq!(audio.sample_rate, 22_050);
        assert_eq!(audio.channels, vec![vec![0.5, 0.0]]);
    }

    #[test]
    fn test_decode_missing_file_is_open_error() {
        let result = decode_audio_file(Path::new("/nonexistent/audio.wav"));
        assert!(matches!(result, Err(Error::AudioOpen { .. })));
    }
}
