//! Logging setup
//!
//! Library code logs through `tracing`; the binary installs a `fmt` subscriber
//! on stderr so stdout stays reserved for notifications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Default filter for a configured verbosity and `-v` count.
///
/// Each `-v` raises the configured level by one step; three reach `trace`.
pub fn default_directive(verbosity: Verbosity, verbose: u8) -> &'static str {
    let base = match verbosity {
        Verbosity::Quiet => 0,
        Verbosity::Normal => 1,
        Verbosity::Verbose => 2,
        Verbosity::Debug => 3,
    };
    match base + usize::from(verbose) {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins.
pub fn init(verbosity: Verbosity, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, verbose)));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_from_config() {
        assert_eq!(default_directive(Verbosity::Quiet, 0), "error");
        assert_eq!(default_directive(Verbosity::Normal, 0), "warn");
        assert_eq!(default_directive(Verbosity::Verbose, 0), "info");
        assert_eq!(default_directive(Verbosity::Debug, 0), "debug");
    }

    #[test]
    fn test_verbose_flags_raise_level() {
        assert_eq!(default_directive(Verbosity::Normal, 1), "info");
        assert_eq!(default_directive(Verbosity::Normal, 2), "debug");
        assert_eq!(default_directive(Verbosity::Normal, 3), "trace");
        assert_eq!(default_directive(Verbosity::Debug, 5), "trace");
    }
}
