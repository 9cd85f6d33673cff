//! Demo command implementation
//!
//! Walks one evaluator through the basic operations, integer powers, the
//! last-result query, and a rejected division so the running state and the
//! diagnostic log are both visible.

use anyhow::Result;
use colored::Colorize;

use crate::cli::output::status;
use crate::core::calculator::Calculator;

/// Execute the demo command
pub fn execute() -> Result<()> {
    tracing::info!("Running evaluator demo");

    let mut calc = Calculator::new();

    println!("Basic operations:");
    println!("  10 + 5 = {}", calc.add(10.0, 5.0));
    println!("  10 - 3 = {}", calc.subtract(10.0, 3.0));
    println!("  4 * 7 = {}", calc.multiply(4.0, 7.0));
    println!("  20 / 4 = {}", calc.divide(20.0, 4.0)?);

    println!("\nInteger powers:");
    println!("  2^10 = {}", calc.power(2.0, 10));
    println!("  2^-2 = {}", calc.power(2.0, -2));

    println!("\nLast result: {}", calc.last_result());

    println!("\nDivision by zero is rejected:");
    match calc.divide(10.0, 0.0) {
        Ok(value) => println!("  {} unexpected success: {value}", status::ERROR.red()),
        Err(e) => println!("  {} rejected: {e}", status::SUCCESS.green()),
    }
    println!("Last result is unchanged: {}", calc.last_result());

    Ok(())
}
