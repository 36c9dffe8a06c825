//! Command-line driver for Pseudo.
//!
//! The `pseudo` binary is a thin wrapper: [`Options::parse`] reads the
//! arguments, [`init_tracing`] sets up logging, and the [`commands`] module
//! does the work. Commands take their writers and input handlers as
//! parameters so they can be driven from tests.

pub mod commands;
mod options;
mod tracing_setup;

pub use options::{Command, Options};
pub use tracing_setup::init_tracing;
