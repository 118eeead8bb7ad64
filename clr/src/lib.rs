// clr/src/lib.rs
//! # clr CLI Application
//!
//! Terminal front end for `clr-core`: argument parsing, logging, streaming
//! stdin through the colorizer, and the color swatch.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod utils;
