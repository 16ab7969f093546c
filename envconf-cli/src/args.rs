//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and validate service settings read from the environment
#[derive(Parser, Debug)]
#[command(name = "envconf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Read additional variables from a .env file, overriding the environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Log every resolved field
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every setting with its key, type and default
    Describe,

    /// Load the settings and report every problem
    Check,

    /// Print every key the settings read, one per line
    Keys,
}
