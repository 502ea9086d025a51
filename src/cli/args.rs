//! CLI argument definitions using clap
//!
//! Commands:
//! - chocolate-house serve [--config <path>] [--port <n>] [--database <path>]
//! - chocolate-house init [--config <path>] [--database <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chocolate House - flavor, ingredient and suggestion tracking backend
#[derive(Parser, Debug)]
#[command(name = "chocolate-house")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the store file, tables and sample rows, then exit
    Init {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Store file, overrides the config file
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Bootstrap the store and start the HTTP server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overrides the config file
        #[arg(long)]
        port: Option<u16>,

        /// Store file, overrides the config file
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
