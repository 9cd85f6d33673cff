//! Evaluation commands
//!
//! One-shot arithmetic through a fresh evaluator. The engine's own
//! diagnostic lines go to stderr; the result goes to stdout in the
//! configured format.

use anyhow::{Context, Result};

use crate::cli::output::{EvalOutcome, OutputConfig};
use crate::core::calculator::Calculator;

/// Execute the add command
pub fn add(output: &OutputConfig, a: f64, b: f64) -> Result<()> {
    tracing::debug!("Evaluating {a} + {b}");
    let mut calc = Calculator::new();
    let result = calc.add(a, b);
    output.emit_result(&EvalOutcome {
        expression: format!("{a} + {b}"),
        result,
    });
    Ok(())
}

/// Execute the sub command
pub fn subtract(output: &OutputConfig, a: f64, b: f64) -> Result<()> {
    tracing::debug!("Evaluating {a} - {b}");
    let mut calc = Calculator::new();
    let result = calc.subtract(a, b);
    output.emit_result(&EvalOutcome {
        expression: format!("{a} - {b}"),
        result,
    });
    Ok(())
}

/// Execute the mul command
pub fn multiply(output: &OutputConfig, a: f64, b: f64) -> Result<()> {
    tracing::debug!("Evaluating {a} * {b}");
    let mut calc = Calculator::new();
    let result = calc.multiply(a, b);
    output.emit_result(&EvalOutcome {
        expression: format!("{a} * {b}"),
        result,
    });
    Ok(())
}

/// Execute the div command
pub fn divide(output: &OutputConfig, a: f64, b: f64) -> Result<()> {
    tracing::debug!("Evaluating {a} / {b}");
    let mut calc = Calculator::new();
    let result = calc
        .divide(a, b)
        .with_context(|| format!("failed to evaluate {a} / {b}"))?;
    output.emit_result(&EvalOutcome {
        expression: format!("{a} / {b}"),
        result,
    });
    Ok(())
}

/// Execute the pow command
pub fn power(output: &OutputConfig, base: f64, exp: i32) -> Result<()> {
    tracing::debug!("Evaluating {base}^{exp}");
    let mut calc = Calculator::new();
    let result = calc.power(base, exp);
    output.emit_result(&EvalOutcome {
        expression: format!("{base}^{exp}"),
        result,
    });
    Ok(())
}
