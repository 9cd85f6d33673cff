//! Evaluation logic
//!
//! # Submodules
//!
//! - [`calculator`] - Four-operation evaluator with last-result memory

pub mod calculator;
