//! Configuration validation.

use crate::config::{Config, ProviderConfig};
use crate::constants::sample_rate;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_provider(&config.provider)
}

/// Validate provider settings.
pub fn validate_provider(provider: &ProviderConfig) -> Result<()> {
    if !(sample_rate::MIN..=sample_rate::MAX).contains(&provider.sample_rate) {
        return Err(Error::ConfigValidation {
            message: format!(
                "sample_rate must be between {} and {} Hz, got {}",
                sample_rate::MIN,
                sample_rate::MAX,
                provider.sample_rate
            ),
        });
    }

    Ok(())
}
