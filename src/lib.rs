//! Wavewin - audio data providers with analysis windows.
//!
//! A provider loads an audio file once and hands the decoded audio to
//! downstream analysis, either whole or restricted to an analysis window.
//! Two representations are available: a flat mono waveform
//! ([`RawAudioProvider`]) and a wrapped multi-channel [`AudioSignal`]
//! ([`SignalAudioProvider`]).

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod signal;
pub mod summary;

use clap::{CommandFactory, Parser};
use cli::{Cli, Command, ConfigAction, InspectArgs};
use config::{
    Config, ProviderConfig, ProviderKind, config_file_path, load_default_config,
    save_default_config, validate_provider,
};
use std::path::Path;
use tracing::info;

pub use error::{Error, Result};
pub use provider::{
    AnalysisWindow, BaseProvider, DataProvider, MixSource, RawAudio, RawAudioProvider,
    SignalAudio, SignalAudioProvider,
};
pub use signal::AudioSignal;
pub use summary::MixSummary;

/// Main entry point for the wavewin CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.inspect.verbose, cli.inspect.quiet);

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let Some(input) = cli.input else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = load_default_config()?;
    inspect_file(&input, &cli.inspect, &config)
}

/// Load `input` through the configured provider and report on its mix.
fn inspect_file(input: &Path, args: &InspectArgs, config: &Config) -> Result<()> {
    let provider_config = ProviderConfig {
        sample_rate: args.sample_rate.unwrap_or(config.provider.sample_rate),
        mono: args.mono || config.provider.mono,
        kind: args.provider.unwrap_or(config.provider.kind),
    };
    validate_provider(&provider_config)?;

    let summary = match provider_config.kind {
        ProviderKind::Raw => inspect_with::<RawAudio>(input, args, &provider_config)?,
        ProviderKind::Signal => inspect_with::<SignalAudio>(input, args, &provider_config)?,
    };

    println!("{summary}");
    Ok(())
}

fn inspect_with<S: MixSource>(
    input: &Path,
    args: &InspectArgs,
    provider_config: &ProviderConfig,
) -> Result<MixSummary> {
    let mut provider = DataProvider::<S>::with_config(input, provider_config)?;
    info!(
        "Loaded {} as {}: {} samples at {} Hz",
        input.display(),
        provider_config.kind,
        provider.num_samples(),
        provider.sample_rate()
    );

    if let Some(length) = args.length {
        let start = args.start.unwrap_or(0);
        provider.set_analysis_window(start, length)?;
        info!("Analysis window: samples {}..{}", start, start + length);
    }

    let summary = MixSummary::of_provider(&provider);

    if let Some(output) = &args.output {
        provider.write_mix(output)?;
        info!("Wrote mix to {}", output.display());
    }

    Ok(summary)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
