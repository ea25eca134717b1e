//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Create a CLI command for the compiled binary.
pub fn dash_cmd() -> Command {
    Command::cargo_bin("subgraph-dash").unwrap()
}

/// Run a command and capture stdout as a UTF-8 string.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}
