//! Command handlers for the CLI

pub mod inspect;
pub mod watch;
