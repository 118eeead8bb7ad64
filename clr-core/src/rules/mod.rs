//! Compiled color rules.
//!
//! A [`Rule`] is what the colorizer consumes: a compiled regular expression,
//! the color code to paint its matches with, and whether a match anywhere
//! paints the whole line. Rules are built from [`crate::config::RuleSpec`]s by
//! the [`compiler`] and never change afterwards.

pub mod compiler;

use regex::Regex;

use crate::color::ColorCode;

/// A single compiled color rule.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The compiled regular expression used for matching.
    pub pattern: Regex,
    /// The escape sequence that opens this rule's highlight.
    pub color: ColorCode,
    /// Paint the whole line if the pattern matches anywhere in it.
    pub highlight_line: bool,
}

impl Rule {
    pub fn new(pattern: Regex, color: ColorCode, highlight_line: bool) -> Self {
        Self {
            pattern,
            color,
            highlight_line,
        }
    }

    /// Returns the non-empty spans this rule paints in `line`, as byte ranges.
    pub fn spans(&self, line: &str) -> Vec<(usize, usize)> {
        if self.highlight_line {
            return if self.pattern.is_match(line) && !line.is_empty() {
                vec![(0, line.len())]
            } else {
                Vec::new()
            };
        }

        self.pattern
            .find_iter(line)
            .filter(|m| !m.is_empty())
            .map(|m| (m.start(), m.end()))
            .collect()
    }
}
