//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! Evaluation logic belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use commands::Commands;
use output::OutputConfig;

/// Mathengine - arithmetic evaluation with a diagnostic log
///
/// Evaluate simple arithmetic expressions; each engine call emits a
/// timestamped diagnostic line to stderr.
#[derive(Parser, Debug)]
#[command(name = "mathengine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print bare results without the echoed expression
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output results in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = OutputConfig::new(self.quiet, self.json, self.verbose);
        if let Some(cmd) = self.command {
            cmd.run(&output)
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
