//! Command-line argument parsing
//!
//! Supports:
//! - Replaying an interaction script and printing its transcript
//! - Printing the effective control configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Edit-in-place text control driver
#[derive(Parser, Debug)]
#[command(name = "inline-edit", version, about = "Edit-in-place text control driver")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Also write debug logs to this file (rotated daily)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replay a YAML interaction script and print one JSON line per step
    Replay {
        /// Script to replay
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Control config file (defaults to the per-user config)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Pretty-print each transcript entry
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective control configuration as YAML
    ShowConfig {
        /// Control config file (defaults to the per-user config)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}
