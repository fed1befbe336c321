//! CLI argument definitions.

use super::validators::parse_sample_rate;
use crate::config::ProviderKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Load audio through a data provider and inspect its analysis window.
#[derive(Debug, Parser)]
#[command(name = "wavewin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Audio file to load.
    pub input: Option<PathBuf>,

    /// Options for loading and windowing the input.
    #[command(flatten)]
    pub inspect: InspectArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for loading an input file.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Representation to load the audio as (overrides config).
    #[arg(short, long, value_enum, env = "WAVEWIN_PROVIDER")]
    pub provider: Option<ProviderKind>,

    /// Sample rate to decode to, in Hz (overrides config).
    #[arg(short = 'r', long, value_parser = parse_sample_rate, env = "WAVEWIN_SAMPLE_RATE")]
    pub sample_rate: Option<u32>,

    /// Mix all channels down to mono (signal provider).
    #[arg(long)]
    pub mono: bool,

    /// First sample of the analysis window.
    #[arg(long, requires = "length")]
    pub start: Option<usize>,

    /// Length of the analysis window in samples.
    #[arg(long)]
    pub length: Option<usize>,

    /// Write the (windowed) mix to this WAV file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_window_arguments() {
        let cli = Cli::try_parse_from([
            "wavewin", "take.wav", "--start", "32000", "--length", "16000", "-p", "signal",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("take.wav")));
        assert_eq!(cli.inspect.start, Some(32_000));
        assert_eq!(cli.inspect.length, Some(16_000));
        assert_eq!(cli.inspect.provider, Some(ProviderKind::Signal));
    }

    #[test]
    fn test_start_requires_length() {
        let result = Cli::try_parse_from(["wavewin", "take.wav", "--start", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_sample_rate_rejected() {
        let result = Cli::try_parse_from(["wavewin", "take.wav", "-r", "12"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["wavewin", "config", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Path
            })
        ));
    }
}
