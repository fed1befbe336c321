//! Audio resampling using rubato.

use crate::constants::RESAMPLE_CHUNK_SIZE;
use crate::error::{Error, Result};
use audioadapter_buffers::direct::SequentialSlice;
use rubato::{Fft, FixedSync, Resampler};
use tracing::debug;

/// Resample a single channel to the target sample rate.
///
/// Returns the input unchanged if already at the target rate. The output
/// length is `ceil(len * to_rate / from_rate)` and the resampler delay is
/// removed, so output sample `i` sits at time `i / to_rate`.
pub fn resample(samples: Vec<f32>, from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    if from_rate == to_rate || samples.is_empty() {
        return Ok(samples);
    }

    let mut resampler = Fft::<f32>::new(
        from_rate as usize,
        to_rate as usize,
        RESAMPLE_CHUNK_SIZE,
        1,
        1,
        FixedSync::Both,
    )
    .map_err(|e| Error::Resample {
        reason: e.to_string(),
    })?;

    let frames_in = resampler.input_frames_next();
    let delay = resampler.output_delay();
    let expected = expected_output_len(samples.len(), from_rate, to_rate);
    let mut output = Vec::with_capacity(expected + delay + RESAMPLE_CHUNK_SIZE);

    for chunk in samples.chunks(frames_in) {
        if chunk.len() == frames_in {
            process_chunk(&mut resampler, chunk, &mut output)?;
        } else {
            let mut padded = chunk.to_vec();
            padded.resize(frames_in, 0.0);
            process_chunk(&mut resampler, &padded, &mut output)?;
        }
    }

    // The filter holds back `delay` frames; flush them out with silence.
    let silence = vec![0.0; frames_in];
    while output.len() < expected + delay {
        let before = output.len();
        process_chunk(&mut resampler, &silence, &mut output)?;
        if output.len() == before {
            return Err(Error::Resample {
                reason: "resampler produced no output while flushing".to_string(),
            });
        }
    }

    output.drain(..delay);
    output.truncate(expected);
    debug!(
        "Resampled {} -> {} samples ({} Hz -> {} Hz)",
        samples.len(),
        output.len(),
        from_rate,
        to_rate
    );
    Ok(output)
}

/// Resample every channel independently to the target sample rate.
pub fn resample_channels(
    channels: Vec<Vec<f32>>,
    from_rate: u32,
    to_rate: u32,
) -> Result<Vec<Vec<f32>>> {
    channels
        .into_iter()
        .map(|plane| resample(plane, from_rate, to_rate))
        .collect()
}

fn process_chunk(resampler: &mut Fft<f32>, chunk: &[f32], output: &mut Vec<f32>) -> Result<()> {
    let input = SequentialSlice::new(chunk, 1, chunk.len()).map_err(|e| Error::Resample {
        reason: format!("failed to create input adapter: {e}"),
    })?;
    let resampled = resampler
        .process(&input, 0, None)
        .map_err(|e| Error::Resample {
            reason: e.to_string(),
        })?;
    output.extend_from_slice(&resampled.take_data());
    Ok(())
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn expected_output_len(input_len: usize, from_rate: u32, to_rate: u32) -> usize {
    ((input_len as f64) * f64::from(to_rate) / f64::from(from_rate)).ceil() as usize
}
