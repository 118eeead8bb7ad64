// clr-core/src/lib.rs
//! # clr Core Library
//!
//! `clr-core` holds the platform-independent part of `clr`: parsing color
//! rules, compiling them, and colorizing lines of text with ANSI escape
//! sequences so that overlapping and nested highlights nest correctly.
//!
//! ## Modules
//!
//! * `color`: Color tokens (`red`, `12`, `default`) and the [`ColorCode`] they build.
//! * `config`: Textual rules ([`RuleSpec`]) and rule sets ([`ColorConfig`]), from
//!   arguments, plain-text files or YAML files.
//! * `rules`: Compiled [`Rule`]s and the compiler that produces them.
//! * `stack`: The [`ColorStack`] of open highlights used while scanning a line.
//! * `colorizer`: The line renderer and the [`Colorizer`] wrapper.
//! * `headless`: One-shot colorizing of multi-line strings.
//! * `errors`: The [`ClrError`] enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use clr_core::{ColorConfig, Colorizer};
//!
//! let config = ColorConfig::from_args(&["ERROR~red", "WARN~yellow,black~line"]).unwrap();
//! let colorizer = Colorizer::from_config(&config).unwrap();
//!
//! assert_eq!(colorizer.render("ERROR: disk full"), "\x1b[38;5;1mERROR\x1b[m: disk full\x1b[m");
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`ClrError`]. All of them happen while the
//! rules are being loaded or compiled; rendering a line cannot fail.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod color;
pub mod colorizer;
pub mod config;
pub mod errors;
pub mod headless;
pub mod rules;
pub mod stack;

pub use color::{Color, ColorCode, Layer, NAMED_COLORS, RESET};
pub use colorizer::{render, Colorizer};
pub use config::{ColorConfig, RuleSpec};
pub use errors::ClrError;
pub use headless::headless_colorize_string;
pub use rules::compiler::{compile_rule, compile_rules};
pub use rules::Rule;
pub use stack::ColorStack;
