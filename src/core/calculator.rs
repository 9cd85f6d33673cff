//! Arithmetic evaluator with last-result memory
//!
//! Each operation logs what it is about to compute and, on success, the
//! computed value. State is one register: the most recently computed
//! result, overwritten by every successful operation.

use crate::config::defaults::DIVISION_EPSILON;
use crate::error::MathError;
use crate::logging::Logger;

/// Four-operation arithmetic evaluator
///
/// The last-result register starts as NaN and reflects exactly the most
/// recent successful operation in program order. Instances are independent;
/// the logger is injected at construction so tests can run several
/// evaluators side by side. Not synchronized: concurrent callers must wrap
/// an instance in a lock.
#[derive(Debug, Clone)]
pub struct Calculator {
    last_result: f64,
    logger: Logger,
}

impl Calculator {
    /// Evaluator logging to stderr
    pub fn new() -> Self {
        Self::with_logger(Logger::stderr())
    }

    /// Evaluator with an injected logger
    pub fn with_logger(logger: Logger) -> Self {
        Self {
            last_result: f64::NAN,
            logger,
        }
    }

    /// Add two numbers
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.logger.info(&format!("Computing {a} + {b}"));
        self.record(a + b)
    }

    /// Subtract `b` from `a`
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.logger.info(&format!("Computing {a} - {b}"));
        self.record(a - b)
    }

    /// Multiply two numbers
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.logger.info(&format!("Computing {a} * {b}"));
        self.record(a * b)
    }

    /// Divide `a` by `b`
    ///
    /// Fails when `|b|` is below [`DIVISION_EPSILON`], treating numerically
    /// unstable denominators the same as zero. The last-result register is
    /// left untouched on failure.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, MathError> {
        self.logger.info(&format!("Computing {a} / {b}"));
        if b.abs() < DIVISION_EPSILON {
            self.logger
                .error(&format!("Division by zero attempted: denominator {b}"));
            return Err(MathError::DivisionByZero { denominator: b });
        }
        Ok(self.record(a / b))
    }

    /// Raise `base` to an integer exponent
    ///
    /// Negative exponents are permitted; they are flagged because the
    /// floating-point reciprocal may lose precision.
    pub fn power(&mut self, base: f64, exp: i32) -> f64 {
        self.logger.info(&format!("Computing {base}^{exp}"));
        if exp < 0 {
            self.logger
                .warn(&format!("Negative exponent {exp} may lose precision"));
        }
        self.record(base.powi(exp))
    }

    /// Most recently computed value, NaN before the first operation
    pub fn last_result(&self) -> f64 {
        self.logger.debug("Retrieving last result");
        self.last_result
    }

    fn record(&mut self, value: f64) -> f64 {
        self.last_result = value;
        self.logger.debug(&format!("Result: {value}"));
        value
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
