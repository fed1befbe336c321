//! CLI argument parsing.

mod args;
mod validators;

pub use args::{Cli, Command, ConfigAction, InspectArgs};
pub use validators::{parse_bounded_u32, parse_sample_rate};
