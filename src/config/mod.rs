//! Configuration module for repowatch
//!
//! Configuration hierarchy, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (REPOWATCH_*)
//! 3. Config file (`--config FILE`, or `<config_dir>/repowatch/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig};
pub use types::{Config, OutputConfig, Verbosity, WatchConfig};
