//! The line colorizer.
//!
//! Every rule contributes start and end events at character positions. The
//! line is then walked once, left to right: at each position highlights that
//! end are closed first, highlights that start are opened next, and then the
//! character itself is written.
//!
//! Closing a highlight is where overlapping rules get interesting. Take
//!
//! ```text
//! echo "Hello there, Kobe!" | clr "Hello there, Kobe!~red" "there~green" "there, Kobe!~yellow"
//! ```
//!
//! When `there` ends the open highlights are, top first, `[yellow, green, red]`.
//! Popping the top would end yellow, which still has `, Kobe!` to go. The
//! stack instead removes green from wherever it sits and leaves yellow on top,
//! so the rest of the line stays yellow.
//!
//! Every close writes a reset before re-emitting the color that is now on top.
//! Without the reset a background set by the closed highlight would bleed into
//! the text that follows.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use log::{debug, warn};

use crate::color::{ColorCode, RESET};
use crate::config::ColorConfig;
use crate::errors::ClrError;
use crate::rules::{compiler::compile_rules, Rule};
use crate::stack::ColorStack;

/// Colors that start and end at one character position, in rule order.
#[derive(Debug, Default)]
struct Cell {
    start: Vec<ColorCode>,
    end: Vec<ColorCode>,
}

/// Collects the start/end events of every rule, keyed by byte offset.
fn build_cells(line: &str, rules: &[Rule]) -> HashMap<usize, Cell> {
    let mut cells: HashMap<usize, Cell> = HashMap::new();
    for rule in rules {
        for (start, end) in rule.spans(line) {
            cells.entry(start).or_default().start.push(rule.color.clone());
            cells.entry(end).or_default().end.push(rule.color.clone());
        }
    }
    cells
}

fn discard(code: &ColorCode, stack: &mut ColorStack) {
    if stack.remove_and_return_above(code).is_none() {
        warn!("Closing color {:?} that was never opened.", code.as_str());
    }
}

/// Closes `code`, writing a reset and resuming whatever highlight is now on top.
fn close(code: &ColorCode, stack: &mut ColorStack, out: &mut String) {
    discard(code, stack);
    out.push_str(RESET);
    if let Some(top) = stack.peek() {
        out.push_str(top.as_str());
    }
}

fn paint(line: &str, rules: &[Rule]) -> (String, ColorStack) {
    let mut cells = build_cells(line, rules);
    let mut stack = ColorStack::new();
    let mut out = String::with_capacity(line.len() + cells.len() * 16 + RESET.len());

    for (i, ch) in line.char_indices() {
        if let Some(cell) = cells.get(&i) {
            for code in &cell.end {
                close(code, &mut stack, &mut out);
            }
            for code in &cell.start {
                out.push_str(code.as_str());
                stack.push(code.clone());
            }
        }
        out.push(ch);
    }

    // Highlights running to the end of the line are closed by the final reset.
    if let Some(cell) = cells.remove(&line.len()) {
        for code in &cell.end {
            discard(code, &mut stack);
        }
    }
    out.push_str(RESET);

    (out, stack)
}

/// Colorizes one line (without its terminator) with the given rules.
///
/// The output always ends with exactly one reset sequence, so the terminal is
/// never left colored after the line.
pub fn render(line: &str, rules: &[Rule]) -> String {
    let (out, stack) = paint(line, rules);
    if !stack.is_empty() {
        debug!("{} highlight(s) left open at end of line.", stack.len());
    }
    out
}

/// An ordered, compiled set of rules ready to colorize lines.
#[derive(Debug, Clone)]
pub struct Colorizer {
    rules: Vec<Rule>,
}

impl Colorizer {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compiles every rule of `config`, failing on the first bad rule set
    /// before any line is rendered.
    pub fn from_config(config: &ColorConfig) -> Result<Self, ClrError> {
        if config.is_empty() {
            return Err(ClrError::NoRules);
        }
        Ok(Self::new(compile_rules(&config.rules)?))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn render(&self, line: &str) -> String {
        render(line, &self.rules)
    }
}
