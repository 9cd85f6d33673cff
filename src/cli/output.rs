//! Output formatting
//!
//! This module provides utilities for displaying evaluation results,
//! status markers, and errors to the user.

use colored::Colorize;
use serde::Serialize;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

/// Output configuration derived from the global CLI flags
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Print bare results only
    pub quiet: bool,
    /// Print machine-readable JSON
    pub json: bool,
    /// Verbosity level (0 = warn, 1 = info, 2+ = debug)
    pub verbose: u8,
}

impl OutputConfig {
    /// Build from the global CLI flags
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Print an evaluation result in the configured format
    pub fn emit_result(&self, outcome: &EvalOutcome) {
        if self.json {
            match serde_json::to_string(outcome) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("{} failed to encode result: {e}", status::ERROR.red()),
            }
        } else if self.quiet {
            println!("{}", outcome.result);
        } else {
            println!("{} = {}", outcome.expression, outcome.result);
        }
    }
}

/// Result of one CLI evaluation, serializable for `--json`
#[derive(Debug, Serialize)]
pub struct EvalOutcome {
    /// Echo of the evaluated expression, e.g. `2 + 3`
    pub expression: String,
    /// Computed value
    pub result: f64,
}

/// Print an error with a red marker to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR.red());
}
