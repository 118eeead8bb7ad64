//! errors.rs - Custom error types for the clr-core library.
//!
//! Every variant describes a configuration problem. They are all raised while
//! rules are being parsed or compiled, before a single line is rendered.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `clr-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClrError {
    #[error("Invalid syntax, expected 'pattern~colors[~options]': {0:?}")]
    MalformedRule(String),

    #[error("Cannot parse regex {0:?}: {1}")]
    InvalidPattern(String, regex::Error),

    #[error("Invalid color {0:?}; expected a color name, 'default' or a number from 0 to 255")]
    InvalidColor(String),

    #[error("No color-rules specified.")]
    NoRules,

    #[error("Failed to parse rules file {0}: {1}")]
    ConfigFormat(String, String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
