//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Every command takes an optional working-copy path, defaulting to `.`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// repowatch - report semantic changes in a git working copy
#[derive(Parser, Debug)]
#[command(name = "repowatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch a working copy and print notifications until interrupted
    Watch {
        /// Working copy root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Quiet period before a burst of changes is reported
        #[arg(long, value_name = "MS")]
        debounce_ms: Option<u64>,

        /// Use polling instead of native notifications
        #[arg(long)]
        poll: bool,
    },

    /// Show the paths that would be watched
    Paths {
        /// Working copy root
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show the current local and remote branch references
    Refs {
        /// Working copy root
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

impl Commands {
    pub fn path(&self) -> &PathBuf {
        match self {
            Commands::Watch { path, .. } | Commands::Paths { path } | Commands::Refs { path } => {
                path
            }
        }
    }
}
