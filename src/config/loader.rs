//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WatchError, WatchResult};

use super::types::{Config, Verbosity};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Result of resolving the effective configuration
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from, if any
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Error from an implicit config file that was skipped in favor of defaults
    pub skipped: Option<WatchError>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WatchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the file layer, then apply environment overrides.
///
/// An explicit file must load; a broken user config is skipped.
pub fn load_or_default(explicit: Option<&Path>) -> WatchResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            path: Some(path.to_path_buf()),
            warnings,
            skipped: None,
        });
    }

    if let Some(user_config) = user_config_path().filter(|p| p.exists()) {
        return Ok(match load_with_warnings(&user_config) {
            Ok((config, warnings)) => LoadedConfig {
                config: with_env_overrides(config),
                path: Some(user_config),
                warnings,
                skipped: None,
            },
            Err(err) => LoadedConfig {
                config: with_env_overrides(Config::default()),
                skipped: Some(err),
                ..LoadedConfig::default()
            },
        });
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        ..LoadedConfig::default()
    })
}

/// `<config_dir>/repowatch/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("repowatch").join("config.toml"))
}

/// Apply environment variable overrides (REPOWATCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // REPOWATCH_DEBOUNCE_MS
    if let Some(ms) = var("REPOWATCH_DEBOUNCE_MS").and_then(|v| v.trim().parse().ok()) {
        config.watch.debounce_ms = ms;
    }

    // REPOWATCH_POLL
    if let Some(val) = var("REPOWATCH_POLL") {
        config.watch.poll_fallback = is_truthy(&val);
    }

    // REPOWATCH_VERBOSITY
    if let Some(verbosity) = var("REPOWATCH_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lenient(&verbosity);
    }

    // REPOWATCH_JSON
    if let Some(val) = var("REPOWATCH_JSON") {
        config.output.json = is_truthy(&val);
    }

    config
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    !(value.is_empty() || value == "false" || value == "0" || value == "no")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "watch",
        "debounce_ms",
        "poll_fallback",
        "poll_interval_ms",
        "output",
        "verbosity",
        "json",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
