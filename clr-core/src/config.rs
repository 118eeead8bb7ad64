//! Configuration management for `clr-core`.
//!
//! Rules are written by users as `pattern~foreground[,background][~options]`,
//! either on the command line or one per line in a rules file. Rules files
//! ending in `.yaml`/`.yml` are read as YAML instead:
//!
//! ```yaml
//! rules:
//!   - pattern: "ERROR"
//!     foreground: red
//!   - pattern: "WARN"
//!     foreground: yellow
//!     background: "52"
//!     line: true
//! ```
//!
//! This module only deals with the textual form ([`RuleSpec`]); turning specs
//! into matchable rules happens in [`crate::rules::compiler`].
//!
//! License: MIT OR Apache-2.0

use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::ClrError;

/// Separates the pattern, colors and options of a textual rule.
pub const RULE_SEPARATOR: char = '~';

/// Option that makes a rule highlight the whole line.
pub const LINE_OPTION: &str = "line";

/// A single, uncompiled color rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct RuleSpec {
    /// Regular expression to search for.
    pub pattern: String,
    /// Foreground color token.
    pub foreground: String,
    /// Optional background color token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Highlight the whole line when the pattern matches anywhere in it.
    #[serde(default)]
    pub line: bool,
}

impl FromStr for RuleSpec {
    type Err = ClrError;

    /// Parses `pattern~foreground[,background][~options]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split(RULE_SEPARATOR);
        let pattern = tokens.next().unwrap_or_default();
        let colors = tokens
            .next()
            .ok_or_else(|| ClrError::MalformedRule(s.to_string()))?;
        let options = tokens.next();

        let color_tokens: Vec<&str> = colors.split(',').collect();
        let (foreground, background) = match color_tokens.as_slice() {
            [fg] => (*fg, None),
            [fg, bg] => (*fg, Some(bg.to_string())),
            _ => return Err(ClrError::MalformedRule(s.to_string())),
        };
        if foreground.is_empty() {
            return Err(ClrError::MalformedRule(s.to_string()));
        }

        let mut line = false;
        for option in options.into_iter().flat_map(|o| o.split(',')) {
            match option {
                LINE_OPTION => line = true,
                "" => {}
                other => warn!("Ignoring unknown option '{}' in rule {:?}.", other, s),
            }
        }

        Ok(RuleSpec {
            pattern: pattern.to_string(),
            foreground: foreground.to_string(),
            background,
            line,
        })
    }
}

/// The ordered list of rules to colorize with.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorConfig {
    pub rules: Vec<RuleSpec>,
}

impl ColorConfig {
    /// Parses textual rules, skipping empty entries (blank lines in a rules
    /// file end up as empty strings).
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ClrError> {
        let mut rules = Vec::with_capacity(args.len());
        for arg in args {
            let arg = arg.as_ref();
            if arg.is_empty() {
                continue;
            }
            rules.push(arg.parse::<RuleSpec>()?);
        }
        debug!("Parsed {} rule(s) from text.", rules.len());
        Ok(ColorConfig { rules })
    }

    /// Loads rules from a file, as YAML when the extension says so and as one
    /// textual rule per line otherwise.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClrError> {
        let path = path.as_ref();
        info!("Loading rules from: {}", path.display());
        let text = std::fs::read_to_string(path)?;

        let config = if is_yaml_path(path) {
            serde_yml::from_str::<ColorConfig>(&text)
                .map_err(|e| ClrError::ConfigFormat(path.display().to_string(), e.to_string()))?
        } else {
            let lines: Vec<&str> = text.lines().collect();
            ColorConfig::from_args(lines.as_slice())?
        };

        info!("Loaded {} rule(s) from file {}.", config.rules.len(), path.display());
        Ok(config)
    }

    /// Appends the rules of `other` after this config's rules.
    pub fn extend(&mut self, other: ColorConfig) {
        self.rules.extend(other.rules);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_foreground_only() {
        let spec: RuleSpec = "kobe~red".parse().unwrap();
        assert_eq!(
            spec,
            RuleSpec {
                pattern: "kobe".into(),
                foreground: "red".into(),
                background: None,
                line: false,
            }
        );
    }

    #[test]
    fn parse_foreground_and_background() {
        let spec: RuleSpec = "shaq~12,blue".parse().unwrap();
        assert_eq!(spec.pattern, "shaq");
        assert_eq!(spec.foreground, "12");
        assert_eq!(spec.background.as_deref(), Some("blue"));
        assert!(!spec.line);
    }

    #[test]
    fn parse_line_option() {
        let spec: RuleSpec = "jordan [[:digit:]]~default,yellow~line".parse().unwrap();
        assert_eq!(spec.pattern, "jordan [[:digit:]]");
        assert_eq!(spec.foreground, "default");
        assert_eq!(spec.background.as_deref(), Some("yellow"));
        assert!(spec.line);
    }

    #[test]
    fn unknown_options_are_ignored() {
        let spec: RuleSpec = "x~red~bold,line".parse().unwrap();
        assert!(spec.line);
        let spec: RuleSpec = "x~red~bold".parse().unwrap();
        assert!(!spec.line);
    }

    #[test]
    fn malformed_rules_are_rejected() {
        for bad in ["kobe", "kobe~", "kobe~,blue", "kobe~red,blue,green"] {
            let err = bad.parse::<RuleSpec>().unwrap_err();
            assert!(matches!(err, ClrError::MalformedRule(_)), "{bad} should be malformed");
        }
    }

    #[test]
    fn from_args_skips_blank_entries() {
        let config = ColorConfig::from_args(&["a~red", "", "b~blue"]).unwrap();
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[1].pattern, "b");
    }

    #[test]
    fn from_args_stops_at_first_bad_rule() {
        assert!(ColorConfig::from_args(&["a~red", "oops"]).is_err());
    }

    #[test]
    fn extend_keeps_order() {
        let mut config = ColorConfig::from_args(&["a~red"]).unwrap();
        config.extend(ColorConfig::from_args(&["b~blue"]).unwrap());
        let patterns: Vec<_> = config.rules.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, ["a", "b"]);
    }

    #[test]
    fn yaml_extension_detection() {
        assert!(is_yaml_path(Path::new("rules.yaml")));
        assert!(is_yaml_path(Path::new("rules.YML")));
        assert!(!is_yaml_path(Path::new("rules.txt")));
        assert!(!is_yaml_path(Path::new("rules")));
    }
}
