//! repowatch CLI - report semantic changes in a git working copy
//!
//! Usage: repowatch <COMMAND>
//!
//! Commands:
//!   watch   Watch a working copy and print notifications
//!   paths   Show the paths that would be watched
//!   refs    Show the current branch references

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};

use repowatch::config::Config;
use repowatch::presentation::{logging, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load_or_default(cli.config.as_deref())?;
    let mut config = loaded.config;
    if cli.json {
        config.output.json = true;
    }

    logging::init(config.output.verbosity, cli.verbose);
    if let Some(path) = &loaded.path {
        debug!("loaded config from {}", path.display());
    }
    if let Some(err) = &loaded.skipped {
        warn!("ignoring user config, using defaults: {err}");
    }
    for warning in &loaded.warnings {
        warn!("{warning}");
    }

    match cli.command {
        Commands::Watch {
            path,
            debounce_ms,
            poll,
        } => {
            if let Some(ms) = debounce_ms {
                config.watch.debounce_ms = ms;
            }
            if poll {
                config.watch.poll_fallback = true;
            }
            commands::watch::cmd_watch(&path, &config)
        }
        Commands::Paths { path } => commands::inspect::cmd_paths(&path, config.output.json),
        Commands::Refs { path } => commands::inspect::cmd_refs(&path, config.output.json),
    }
}
