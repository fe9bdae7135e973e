//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Human-readable output of notifications, paths and refs
//! - Logging setup
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `output` - Console listener and renderers
//! - `logging` - `tracing-subscriber` initialization

pub mod cli;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::ConsoleListener;
