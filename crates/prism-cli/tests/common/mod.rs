//! Shared test utilities for prism-cli integration tests.

use assert_cmd::Command;

/// Get a Command for the prism binary with a clean environment.
///
/// # Panics
///
/// Panics if the prism binary cannot be found. This should not happen
/// in a properly configured test environment.
#[allow(deprecated)]
pub fn prism_cmd() -> Command {
    let mut cmd = Command::cargo_bin("prism").expect("prism binary should exist");
    cmd.env_remove("PRISM_COLOR")
        .env_remove("PRISM_VERBOSE")
        .env_remove("PRISM_NO_AUTORESET");
    cmd
}
