//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.


#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::generators::*;
    use crate::config::defaults::DIVISION_EPSILON;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_operand_generator(value in operand()) {
            prop_assert!(value.is_finite());
        }

        #[test]
        fn test_safe_denominator_generator(value in safe_denominator()) {
            prop_assert!(value.abs() >= DIVISION_EPSILON);
        }

        #[test]
        fn test_zero_denominator_generator(value in zero_denominator()) {
            prop_assert!(value.abs() < DIVISION_EPSILON);
        }
    }
}
