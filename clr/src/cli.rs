// clr/src/cli.rs
//! This file defines the command-line interface (CLI) for the clr application.

use clap::Parser;
use std::path::PathBuf;

const RULE_HELP: &str = "\
COLOR RULES:
  A color rule has the form  pattern~colors[~options]

  pattern  A string or regular expression. Every match is highlighted.
  colors   foreground[,background]. Each color is one of black, red, green,
           yellow, blue, pink, cyan, lightgray, darkgray, lightred,
           lightgreen, lightyellow, lightblue, lightpink, lightcyan, white,
           default, or a number from 0 to 255 (see --swatch).
  options  Comma-separated. 'line' highlights the whole line whenever the
           pattern matches anywhere in it.

  Rules are applied in order; later rules nest inside earlier ones.

EXAMPLES:
  echo 'Hello, World 2019' | clr 'Hello~red' '[[:digit:]]~blue,yellow'
  echo 'Hello, World 2019' | clr 'World~default,pink~line'
  tail -f app.log | clr --rules rules.yaml";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "clr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Colorize piped output with regular-expression color rules",
    long_about = "clr reads text from stdin and writes it back with every match of the given color rules highlighted. Pipe logs through it and give info and error lines their own colors.",
    after_long_help = RULE_HELP,
)]
pub struct Cli {
    /// Color rules of the form pattern~foreground[,background][~options].
    #[arg(value_name = "COLOR_RULE")]
    pub rules: Vec<String>,

    /// Read rules from a file (one rule per line, or YAML for .yaml/.yml).
    #[arg(long = "rules", short = 'r', value_name = "FILE", env = "CLR_RULES", help = "Read color rules from a file; rules given on the command line are applied after them.")]
    pub rules_file: Option<PathBuf>,

    /// Print the 0-255 color chart and exit.
    #[arg(long, short = 's', help = "Display the colors for the 0-255 color range.")]
    pub swatch: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,
}
