//! Application-wide constants.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "wavewin";

/// Sample rate audio is decoded to unless configured otherwise.
pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

/// Accepted range for the configured sample rate, in Hz.
pub mod sample_rate {
    /// Lowest accepted sample rate.
    pub const MIN: u32 = 1_000;
    /// Highest accepted sample rate.
    pub const MAX: u32 = 384_000;
}

/// Input frames handed to the resampler per call.
pub const RESAMPLE_CHUNK_SIZE: usize = 1024;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "WAVEWIN_CONFIG";
