//! CLI Argument Parsing
//!
//! Global flags (`--config`, `--verbose`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// revsync - revision-aware deployment to local and SSH locations
#[derive(Parser, Debug)]
#[command(name = "revsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: .revsync.toml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the changes since the last deployment to a location
    Deploy {
        /// Location name from the configuration
        location: String,

        /// Also send this file (repeatable)
        #[arg(short, long = "append", value_name = "PATH")]
        append: Vec<String>,

        /// Also delete this file on the location (repeatable)
        #[arg(short, long = "remove", value_name = "PATH")]
        remove: Vec<String>,

        /// Deploy from this revision instead of the recorded one
        #[arg(long, value_name = "REV")]
        from: Option<String>,

        /// Deploy up to this revision instead of the current one
        #[arg(long, value_name = "REV")]
        to: Option<String>,

        /// Answer yes to every confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the deployed and current revision of a location
    Status {
        /// Location name from the configuration
        location: String,
    },

    /// List configured locations
    Locations,
}
