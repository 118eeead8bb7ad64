//! Subcommand implementations for the clr CLI.

pub mod colorize;
pub mod swatch;
