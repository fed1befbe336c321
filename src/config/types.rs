//! Configuration type definitions.

use crate::constants::DEFAULT_SAMPLE_RATE;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// How providers decode audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Sample rate decoded audio is brought to, in Hz.
    pub sample_rate: u32,

    /// Mix all channels down to one (wrapped signals only; raw audio is always mono).
    pub mono: bool,

    /// Provider used by the command line when none is given.
    pub kind: ProviderKind,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            mono: false,
            kind: ProviderKind::default(),
        }
    }
}

/// Representation a provider hands out.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Flat mono waveform.
    #[default]
    Raw,
    /// Wrapped multi-channel signal.
    Signal,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Signal => write!(f, "signal"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" | "waveform" => Ok(Self::Raw),
            "signal" | "wrapped" => Ok(Self::Signal),
            other => Err(format!("unknown provider kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_from_str() {
        assert_eq!("raw".parse::<ProviderKind>().ok(), Some(ProviderKind::Raw));
        assert_eq!(
            "Signal".parse::<ProviderKind>().ok(),
            Some(ProviderKind::Signal)
        );
        assert_eq!(
            "wrapped".parse::<ProviderKind>().ok(),
            Some(ProviderKind::Signal)
        );
        assert!("nussl".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_kind_display() {
        assert_eq!(ProviderKind::Raw.to_string(), "raw");
        assert_eq!(ProviderKind::Signal.to_string(), "signal");
    }

    #[test]
    fn test_provider_config_default_values() {
        let provider = ProviderConfig::default();
        assert_eq!(provider.sample_rate, 16_000);
        assert!(!provider.mono);
        assert_eq!(provider.kind, ProviderKind::Raw);
    }
}
