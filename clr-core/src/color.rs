//! Color tokens and the ANSI SGR sequences they render to.
//!
//! A rule names its colors with words (`red`, `lightblue`), numbers from the
//! 256-color chart (`0`..=`255`) or `default`. This module turns those words
//! into [`Color`] values and combines a foreground and an optional background
//! into a [`ColorCode`], the opaque token the colorizer stacks and compares.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use crate::errors::ClrError;

/// Sequence that returns the terminal to its default colors.
pub const RESET: &str = "\x1b[m";

/// Named colors and their index in the 256-color chart.
pub const NAMED_COLORS: [(&str, u8); 16] = [
    ("black", 0),
    ("red", 1),
    ("green", 2),
    ("yellow", 3),
    ("blue", 4),
    ("pink", 5),
    ("cyan", 6),
    ("lightgray", 7),
    ("darkgray", 8),
    ("lightred", 9),
    ("lightgreen", 10),
    ("lightyellow", 11),
    ("lightblue", 12),
    ("lightpink", 13),
    ("lightcyan", 14),
    ("white", 15),
];

/// Which half of a color pair a [`Color`] paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    fn sgr_prefix(self) -> char {
        match self {
            Layer::Foreground => '3',
            Layer::Background => '4',
        }
    }
}

/// One side of a color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's own default for this layer.
    Default,
    /// An entry of the 256-color chart.
    Indexed(u8),
}

impl Color {
    /// Renders this color as an SGR sequence for the given layer.
    pub fn sgr(self, layer: Layer) -> String {
        let prefix = layer.sgr_prefix();
        match self {
            Color::Default => format!("\x1b[{prefix}9m"),
            Color::Indexed(n) => format!("\x1b[{prefix}8;5;{n}m"),
        }
    }
}

impl FromStr for Color {
    type Err = ClrError;

    /// Parses a color name (case-insensitive), `default`, or a number 0-255.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lower = token.to_ascii_lowercase();
        if lower == "default" {
            return Ok(Color::Default);
        }
        if let Some((_, index)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
            return Ok(Color::Indexed(*index));
        }
        token
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| ClrError::InvalidColor(s.to_string()))
    }
}

/// A fully formed escape sequence selecting a foreground and, optionally, a
/// background color.
///
/// The colorizer never looks inside a `ColorCode`; it only writes it out and
/// compares it for equality with other codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorCode(String);

impl ColorCode {
    pub fn new(foreground: Color, background: Option<Color>) -> Self {
        let mut code = foreground.sgr(Layer::Foreground);
        if let Some(bg) = background {
            code.push_str(&bg.sgr(Layer::Background));
        }
        ColorCode(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
