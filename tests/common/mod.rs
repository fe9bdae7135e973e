//! Common test utilities for repowatch integration tests.
//!
//! This module provides:
//! - `FakeRepo`: a temp directory laid out like a git working copy
//! - `Recorder`: a listener that collects notifications
//! - `run_cli`: runs the binary with an isolated config directory

#![allow(dead_code)]

pub mod env;
pub mod repo;

pub use env::*;
pub use repo::*;
