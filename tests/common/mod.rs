//! Common test utilities and helpers
//!
//! This module provides shared helpers for integration tests that drive
//! the mathengine binary.

use std::process::{Command, Output};

/// Run the mathengine binary with the given arguments
pub fn run_mathengine(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mathengine"));
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute mathengine")
}

/// Stdout as UTF-8, trimmed
pub fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Stderr as UTF-8
pub fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
