//! CLI module
//!
//! Provides command-line interface for:
//! - init: create and seed the store without serving
//! - serve: bootstrap the store and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
