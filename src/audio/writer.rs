//! WAV file writing.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use ndarray::ArrayView2;
use tracing::debug;

use crate::error::{Error, Result};

/// Write a (channels × frames) block of samples as 32-bit float WAV.
///
/// Float output keeps samples bit-exact, so a written mix decodes back to
/// the same values.
pub fn write_wav_file(path: &Path, audio: ArrayView2<'_, f32>, sample_rate: u32) -> Result<()> {
    let wav_error = |source| Error::WavWrite {
        path: path.to_path_buf(),
        source,
    };

    let channels = u16::try_from(audio.nrows()).map_err(|_| Error::ShapeMismatch {
        reason: format!("{} channels cannot be stored in a WAV file", audio.nrows()),
    })?;
    if channels == 0 {
        return Err(Error::ShapeMismatch {
            reason: "cannot write a signal without channels".to_string(),
        });
    }

    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec).map_err(wav_error)?;

    // Frames are interleaved: column-major walk over the channel rows.
    for frame in audio.columns() {
        for &sample in frame {
            writer.write_sample(sample).map_err(wav_error)?;
        }
    }

    writer.finalize().map_err(wav_error)?;
    debug!(
        "Wrote {} frame(s), {} channel(s) to {}",
        audio.ncols(),
        channels,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};
    use tempfile::TempDir;

    #[test]
    fn test_written_wav_is_interleaved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stereo.wav");
        let audio = array![[0.1_f32, 0.2, 0.3], [-0.1, -0.2, -0.3]];

        write_wav_file(&path, audio.view(), 8000).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 2);
        assert_eq!(reader.spec().sample_rate, 8000);
        let samples: Vec<f32> = reader.samples::<f32>().map(std::result::Result::unwrap).collect();
        assert_eq!(samples, vec![0.1, -0.1, 0.2, -0.2, 0.3, -0.3]);
    }

    #[test]
    fn test_zero_channels_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.wav");
        let audio = Array2::<f32>::zeros((0, 10));

        let result = write_wav_file(&path, audio.view(), 8000);
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }
}
