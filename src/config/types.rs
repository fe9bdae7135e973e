//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::DEBOUNCE_MS;
use crate::error::{WatchError, WatchResult};

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Quiet period before a burst is dispatched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Use the polling backend instead of native notifications
    #[serde(default)]
    pub poll_fallback: bool,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            poll_fallback: false,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEBOUNCE_MS
}

fn default_poll_interval_ms() -> u64 {
    1000
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Emit notifications as NDJSON
    #[serde(default)]
    pub json: bool,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a user-supplied level; unknown values fall back to `Normal`
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> WatchResult<LoadedConfig> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (REPOWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.watch.debounce_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.watch.poll_interval_ms)
    }

    /// Reject values that parse but cannot be used
    pub fn validate(&self, file: &Path) -> WatchResult<()> {
        if self.watch.poll_interval_ms == 0 {
            return Err(WatchError::InvalidConfig {
                file: file.to_path_buf(),
                message: "watch.poll_interval_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
