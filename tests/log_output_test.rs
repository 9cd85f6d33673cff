//! Integration tests for the diagnostic log
//!
//! The engine writes one line per call to stderr. When stderr is a pipe,
//! as it is here, the lines carry no color codes.

mod common;

use common::{run_mathengine, stderr_str};
use regex::Regex;

fn log_line(level: &str, message: &str) -> Regex {
    let pattern = format!(
        r"(?m)^\d{{4}}-\d{{2}}-\d{{2}} \d{{2}}:\d{{2}}:\d{{2}}\.\d{{3}} \[{level}\] {message}$"
    );
    Regex::new(&pattern).expect("valid test regex")
}

#[test]
fn test_add_emits_info_and_debug_lines() {
    let output = run_mathengine(&["add", "2", "3"]);
    let stderr = stderr_str(&output);

    assert!(
        log_line("INFO", r"Computing 2 \+ 3").is_match(&stderr),
        "missing info line in: {stderr}"
    );
    assert!(
        log_line("DEBUG", "Result: 5").is_match(&stderr),
        "missing debug line in: {stderr}"
    );
}

#[test]
fn test_divide_by_zero_emits_error_line() {
    let output = run_mathengine(&["div", "5", "0"]);
    let stderr = stderr_str(&output);

    assert!(
        log_line("ERROR", "Division by zero attempted: denominator 0").is_match(&stderr),
        "missing error line in: {stderr}"
    );
}

#[test]
fn test_negative_exponent_emits_warn_line() {
    let output = run_mathengine(&["pow", "2", "-2"]);
    let stderr = stderr_str(&output);

    assert!(
        log_line("WARN", "Negative exponent -2 may lose precision").is_match(&stderr),
        "missing warn line in: {stderr}"
    );
}

#[test]
fn test_piped_stderr_is_uncolored() {
    let output = run_mathengine(&["add", "2", "3"]);
    assert!(
        !stderr_str(&output).contains('\u{1b}'),
        "piped stderr must not contain escape codes"
    );
}

#[test]
fn test_one_line_per_engine_call() {
    // add emits exactly two records: the computation and its result
    let output = run_mathengine(&["add", "2", "3"]);
    let stderr = stderr_str(&output);
    let engine_lines = stderr
        .lines()
        .filter(|line| line.contains("[INFO]") || line.contains("[DEBUG]"))
        .count();
    assert_eq!(engine_lines, 2, "unexpected diagnostics: {stderr}");
}
