//! Running the CLI in an isolated environment.

use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running a repowatch CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Command for the repowatch binary with HOME and the config dir pointed at
/// `home`, so no user config leaks into the test.
pub fn cli_command(cwd: &Path, home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_repowatch"));
    cmd.current_dir(cwd)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("REPOWATCH_DEBOUNCE_MS")
        .env_remove("REPOWATCH_POLL")
        .env_remove("REPOWATCH_VERBOSITY")
        .env_remove("REPOWATCH_JSON")
        .stdin(Stdio::null());
    cmd
}

pub fn run_cli(cwd: &Path, home: &TempDir, args: &[&str]) -> TestResult {
    let output = cli_command(cwd, home).args(args).output().unwrap();
    TestResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
