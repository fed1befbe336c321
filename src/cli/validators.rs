//! CLI argument validators.

use crate::constants::sample_rate;

/// Parse and validate a sample rate in Hz.
pub fn parse_sample_rate(s: &str) -> Result<u32, String> {
    parse_bounded_u32(s, sample_rate::MIN, sample_rate::MAX, "sample rate")
}

/// Parse and validate a bounded integer value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_u32(s: &str, min: u32, max: u32, name: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid whole number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!("{name} must be between {min} and {max}, got {value}"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_rate_valid() {
        assert_eq!(parse_sample_rate("16000").ok(), Some(16_000));
        assert_eq!(parse_sample_rate("1000").ok(), Some(1_000));
        assert_eq!(parse_sample_rate("384000").ok(), Some(384_000));
    }

    #[test]
    fn test_parse_sample_rate_out_of_range() {
        assert!(parse_sample_rate("999").is_err());
        assert!(parse_sample_rate("384001").is_err());
    }

    #[test]
    fn test_parse_sample_rate_not_a_number() {
        assert!(parse_sample_rate("fast").is_err());
        assert!(parse_sample_rate("16000.5").is_err());
        assert!(parse_sample_rate("-16000").is_err());
    }
}
