//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod demo;
pub mod eval;

use anyhow::Result;
use clap::Subcommand;

use super::output::OutputConfig;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two numbers
    Add {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Subtract the second number from the first
    Sub {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Multiply two numbers
    Mul {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Divide the first number by the second
    Div {
        /// Numerator
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Denominator
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Raise a base to an integer exponent
    Pow {
        /// Base
        #[arg(allow_negative_numbers = true)]
        base: f64,

        /// Exponent (may be negative)
        #[arg(allow_negative_numbers = true)]
        exp: i32,
    },

    /// Walk the evaluator through each operation end to end
    Demo,
}

impl Commands {
    /// Execute the command
    pub fn run(self, output: &OutputConfig) -> Result<()> {
        match self {
            Commands::Add { a, b } => eval::add(output, a, b),
            Commands::Sub { a, b } => eval::subtract(output, a, b),
            Commands::Mul { a, b } => eval::multiply(output, a, b),
            Commands::Div { a, b } => eval::divide(output, a, b),
            Commands::Pow { base, exp } => eval::power(output, base, exp),
            Commands::Demo => demo::execute(),
        }
    }
}
