// clr-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for colorizing whole strings without a CLI around it.

use anyhow::{Context, Result};

use crate::colorizer::Colorizer;
use crate::config::ColorConfig;

/// Compiles `config` and colorizes every line of `content`.
///
/// Line terminators (`\n` or `\r\n`) are kept as they were; only the text
/// between them is colorized. A trailing line without a terminator is
/// colorized too.
pub fn headless_colorize_string(config: &ColorConfig, content: &str) -> Result<String> {
    let colorizer = Colorizer::from_config(config).context("Failed to compile color rules")?;

    let mut out = String::with_capacity(content.len() * 2);
    for chunk in content.split_inclusive('\n') {
        let (line, terminator) = match chunk.strip_suffix("\r\n") {
            Some(line) => (line, "\r\n"),
            None => match chunk.strip_suffix('\n') {
                Some(line) => (line, "\n"),
                None => (chunk, ""),
            },
        };
        out.push_str(&colorizer.render(line));
        out.push_str(terminator);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorizes_each_line() -> Result<()> {
        let config = ColorConfig::from_args(&["ERROR~red", "WARN~yellow~line"])?;
        let out = headless_colorize_string(&config, "ERROR one\nWARN two\r\nok")?;
        assert_eq!(
            out,
            "\x1b[38;5;1mERROR\x1b[m one\x1b[m\n\x1b[38;5;3mWARN two\x1b[m\r\nok\x1b[m"
        );
        Ok(())
    }

    #[test]
    fn empty_content_stays_empty() -> Result<()> {
        let config = ColorConfig::from_args(&["x~red"])?;
        assert_eq!(headless_colorize_string(&config, "")?, "");
        Ok(())
    }

    #[test]
    fn bad_rules_fail_before_rendering() {
        let config = ColorConfig::from_args(&["x~nope"]).unwrap();
        let err = headless_colorize_string(&config, "x").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid color \"nope\""));
    }
}
