// clr/src/logger.rs
//! Logger setup for the clr binary.
//!
//! Logs always go to stderr; stdout carries nothing but colorized text.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is honoured (default `warn`) unless `level` overrides it.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
