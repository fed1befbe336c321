//! Audio decoding, resampling and writing.

mod decode;
mod resample;
mod writer;

pub use decode::{DecodedAudio, decode_audio_file, load_audio};
pub use resample::{resample, resample_channels};
pub use writer::write_wav_file;
