//! compiler.rs - Turns textual rule specs into compiled [`Rule`]s.
//!
//! Every spec is checked before anything is rendered: an unknown color or a
//! pattern that does not compile aborts the whole rule set.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::RegexBuilder;

use crate::color::{Color, ColorCode};
use crate::config::RuleSpec;
use crate::errors::ClrError;
use crate::rules::Rule;

/// Upper bound on the compiled size of a single pattern.
pub const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Builds the color code for a spec's foreground and optional background.
pub fn compile_color(spec: &RuleSpec) -> Result<ColorCode, ClrError> {
    let foreground: Color = spec.foreground.parse()?;
    let background = spec
        .background
        .as_deref()
        .map(str::parse::<Color>)
        .transpose()?;
    Ok(ColorCode::new(foreground, background))
}

/// Compiles a single spec.
pub fn compile_rule(spec: &RuleSpec) -> Result<Rule, ClrError> {
    let pattern = RegexBuilder::new(&spec.pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| ClrError::InvalidPattern(spec.pattern.clone(), e))?;
    let color = compile_color(spec)?;
    Ok(Rule::new(pattern, color, spec.line))
}

/// Compiles a list of specs, preserving their order.
///
/// All specs are checked; a lone failure is returned as is, several are
/// folded into a single [`ClrError::Fatal`] listing each of them.
pub fn compile_rules(specs: &[RuleSpec]) -> Result<Vec<Rule>, ClrError> {
    debug!("Starting compilation of {} rules.", specs.len());

    let mut compiled = Vec::with_capacity(specs.len());
    let mut errors = Vec::new();

    for spec in specs {
        match compile_rule(spec) {
            Ok(rule) => {
                debug!(
                    target: "clr_core::compiler",
                    "Rule {:?} compiled to {:?} (line: {}).",
                    spec.pattern,
                    rule.color.as_str(),
                    rule.highlight_line
                );
                compiled.push(rule);
            }
            Err(e) => errors.push(e),
        }
    }

    match errors.len() {
        0 => {
            debug!("Finished compiling rules. Total compiled: {}.", compiled.len());
            Ok(compiled)
        }
        1 => Err(errors.remove(0)),
        n => {
            let message = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            Err(ClrError::Fatal(format!("Failed to compile {} rule(s):\n{}", n, message)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(s: &str) -> RuleSpec {
        s.parse().unwrap()
    }

    #[test]
    fn compiles_color_codes() {
        let rules = compile_rules(&[
            spec("kobe~red"),
            spec("shaq~12,blue"),
            spec("jordan [[:digit:]]~default,yellow~line"),
        ])
        .unwrap();

        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].color.as_str(), "\x1b[38;5;1m");
        assert!(!rules[0].highlight_line);
        assert_eq!(rules[1].color.as_str(), "\x1b[38;5;12m\x1b[48;5;4m");
        assert_eq!(rules[2].color.as_str(), "\x1b[39m\x1b[48;5;3m");
        assert!(rules[2].highlight_line);
        assert_eq!(rules[2].pattern.as_str(), "jordan [[:digit:]]");
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = compile_rules(&[spec("(unclosed~red")]).unwrap_err();
        assert!(matches!(err, ClrError::InvalidPattern(ref p, _) if p == "(unclosed"));
    }

    #[test]
    fn invalid_color_is_reported() {
        let err = compile_rules(&[spec("ok~red,purple")]).unwrap_err();
        assert!(matches!(err, ClrError::InvalidColor(ref c) if c == "purple"));
    }

    #[test]
    fn several_errors_are_folded() {
        let err = compile_rules(&[spec("(~red"), spec("fine~blue"), spec("x~999")]).unwrap_err();
        match err {
            ClrError::Fatal(msg) => {
                assert!(msg.starts_with("Failed to compile 2 rule(s):"));
                assert!(msg.contains("Cannot parse regex"));
                assert!(msg.contains("\"999\""));
            }
            other => panic!("expected Fatal, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_compiles_to_nothing() {
        assert!(compile_rules(&[]).unwrap().is_empty());
    }
}
