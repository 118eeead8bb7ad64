// clr/src/main.rs
//! clr entry point.
//!
//! Loads and compiles the color rules, then streams stdin to stdout through
//! the colorizer.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{LevelFilter, debug, info};
use std::io;

use clr::cli::Cli;
use clr::commands::{colorize::run_colorize, swatch::print_swatch};
use clr::logger;
use clr::utils::platform::eof_key_combo;
use clr_core::{ColorConfig, Colorizer};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    if args.swatch {
        print_swatch(&mut io::stdout().lock()).context("Cannot print swatch")?;
        return Ok(());
    }

    // 1. Rules file first, then command-line rules.
    let mut config = match &args.rules_file {
        Some(path) => ColorConfig::load_from_file(path)
            .with_context(|| format!("Cannot read rules file {}", path.display()))?,
        None => ColorConfig::default(),
    };
    config.extend(ColorConfig::from_args(args.rules.as_slice())?);
    debug!("{} rule(s) configured.", config.rules.len());

    // 2. Compile everything before touching stdin.
    let colorizer = Colorizer::from_config(&config)?;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        info!("Reading from the terminal; press {} to finish.", eof_key_combo());
    }

    run_colorize(&colorizer, stdin.lock(), io::stdout().lock())?;
    Ok(())
}
