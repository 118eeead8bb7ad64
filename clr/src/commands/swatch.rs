//! Prints the 256-color chart so users can pick numeric colors for rules.

use std::io::{self, Write};

use clr_core::{Color, ColorCode, RESET};

/// Backgrounds too dark for the default dark label.
const DARK_BACKGROUNDS: [u8; 10] = [0, 16, 17, 18, 19, 232, 233, 234, 235, 236];

const DARK_LABEL: u8 = 16;
const LIGHT_LABEL: u8 = 248;
const PER_ROW: usize = 16;

/// Writes every color 0-255 as a labelled cell, sixteen per row.
pub fn print_swatch<W: Write>(writer: &mut W) -> io::Result<()> {
    for index in 0..=u8::MAX {
        let label = if DARK_BACKGROUNDS.contains(&index) {
            LIGHT_LABEL
        } else {
            DARK_LABEL
        };
        let code = ColorCode::new(Color::Indexed(label), Some(Color::Indexed(index)));
        write!(writer, "{code}{index:>4}{RESET} ")?;
        if (usize::from(index) + 1) % PER_ROW == 0 {
            writeln!(writer)?;
        }
    }
    writer.flush()
}
