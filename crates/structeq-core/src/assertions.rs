//! Test assertions built on the comparer.

use crate::comparer::{ComparisonConfig, StructuralComparer};
use crate::printer::stringify;
use crate::reflect::Reflect;

/// Outcome of an assertion comparison: `None` when it holds, otherwise the panic message
#[doc(hidden)]
pub fn check(
    left: &dyn Reflect,
    right: &dyn Reflect,
    config: ComparisonConfig,
    expect_equal: bool,
) -> Option<String> {
    let mut comparer = StructuralComparer::new(config.with_record_errors(true));
    match comparer.compare(left, right) {
        Ok(equal) if equal == expect_equal => None,
        Ok(_) if expect_equal => Some(format!(
            "values are not deeply equal\n  left: {}\n right: {}\n{}",
            stringify(left),
            stringify(right),
            format_diagnostics(comparer.errors())
        )),
        Ok(_) => Some(format!(
            "values are deeply equal\n  left: {}\n right: {}",
            stringify(left),
            stringify(right)
        )),
        Err(err) => Some(format!("comparison failed: {}", err)),
    }
}

/// Render diagnostics as an indented list
pub fn format_diagnostics(errors: &[String]) -> String {
    let mut out = String::new();
    for error in errors {
        out.push_str(&format!("  - {}\n", error));
    }
    out
}

/// Assert that two values are deeply equal (full equality unless a config is given)
///
/// ```
/// use structeq_core::assert_deep_eq;
///
/// assert_deep_eq!(vec![1, 2], vec![1i64, 2]);
/// ```
#[macro_export]
macro_rules! assert_deep_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_deep_eq!($left, $right, $crate::ComparisonConfig::full())
    };
    ($left:expr, $right:expr, $config:expr $(,)?) => {
        if let Some(message) = $crate::assertions::check(&$left, &$right, $config, true) {
            panic!("assertion failed: {}", message);
        }
    };
}

/// Assert that two values are not deeply equal
#[macro_export]
macro_rules! assert_deep_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_deep_ne!($left, $right, $crate::ComparisonConfig::full())
    };
    ($left:expr, $right:expr, $config:expr $(,)?) => {
        if let Some(message) = $crate::assertions::check(&$left, &$right, $config, false) {
            panic!("assertion failed: {}", message);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_diagnostics() {
        let message = check(&1u8, &2u8, ComparisonConfig::full(), true).unwrap();

        assert!(message.contains("left: 1"));
        assert!(message.contains("  - Primitive values differ: 1 != 2"));
    }

    #[test]
    fn test_check_passes_when_expectation_holds() {
        assert!(check(&1u8, &1i64, ComparisonConfig::full(), true).is_none());
        assert!(check(&1u8, &2u8, ComparisonConfig::full(), false).is_none());
    }

    #[test]
    fn test_macros() {
        assert_deep_eq!(Some(3u8), Some(3u8));
        assert_deep_ne!(vec![1, 2], vec![2, 1]);
        assert_deep_eq!(7u8, 9u8, ComparisonConfig::shape());
    }

    #[test]
    #[should_panic(expected = "values are not deeply equal")]
    fn test_assert_deep_eq_panics() {
        assert_deep_eq!("a", "b");
    }
}
