//! Error types for mathengine
//!
//! Domain-specific error types using thiserror.

use thiserror::Error;

use crate::config::defaults::DIVISION_EPSILON;

/// Arithmetic evaluation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Denominator numerically indistinguishable from zero
    #[error("Cannot divide by zero: |{denominator}| is below the {epsilon} threshold", epsilon = DIVISION_EPSILON)]
    DivisionByZero { denominator: f64 },
}
