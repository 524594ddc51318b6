use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docdb", bin_name = "docdb", version)]
#[command(about = "Path-addressed key/value store in a single JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Document file to use (overrides DOCDB_PATH and config files)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the value stored at a key (e.g. users/user1/age)
    Get {
        key: String,

        /// Print strings as JSON too
        #[arg(long)]
        json: bool,
    },

    /// Store a value at a key; the root key must already exist
    Set {
        key: String,

        value: String,

        /// Parse VALUE as JSON instead of storing it as a string
        #[arg(long)]
        json: bool,
    },

    /// Remove the value at a key
    #[command(alias = "rm")]
    Delete { key: String },

    /// Create an empty document if none exists
    Init,

    /// Show the document location and store bookkeeping
    Info,

    /// Show the effective configuration
    Config,
}
