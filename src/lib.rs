//! Predicates that stand in for expected values.
//!
//! An [`ArgThat`] compares equal to whatever its predicate accepts. Embedded in
//! an expected sequence or mapping, it lets an assertion check part of a
//! structure exactly and the rest by condition:
//!
//! ```
//! use arg_that::{assert_eqish, expected, expected_map};
//! use std::collections::HashMap;
//!
//! assert_eqish!(vec![5, 6, 1], expected![5, 6, that(|x: &i32| *x < 2)]);
//! assert_eqish!(HashMap::from([("a", 1), ("b", 99)]), expected_map! { "a" => 1, "b" => that(|x: &i32| *x > 98 && *x < 100) });
//! ```
//!
//! Comparisons always ask the expected side, see [`Matcher`].

macro_rules! scalar_types {
  ($callback:ident) => {
    $callback!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String, ());
  };
}

pub mod assertion;
pub mod error;
pub mod expected;
#[cfg(feature = "json")]
pub mod json;
pub mod matcher;
pub mod that_arg;

pub use error::{Error, Result};
pub use expected::Expected;
pub use matcher::{exactly, smart_eq, Exactly, Matcher};
pub use that_arg::{arg_that, ArgThat};

/// Like `assert_eq!`, but the right-hand side is the expected value and decides
/// equality through [`Matcher`]. The panic message has `assert_eq!`'s layout.
#[macro_export]
macro_rules! assert_eqish {
  ($actual:expr, $expected:expr $(,)?) => {
    match (&$actual, &$expected) {
      (actual, expected) => {
        if !$crate::Matcher::matches(expected, actual) {
          panic!("assertion `left == right` failed\n  left: {:?}\n right: {:?}", actual, expected)
        }
      }
    }
  };
  ($actual:expr, $expected:expr, $($arg:tt)+) => {
    match (&$actual, &$expected) {
      (actual, expected) => {
        if !$crate::Matcher::matches(expected, actual) {
          panic!("assertion `left == right` failed: {}\n  left: {:?}\n right: {:?}", format_args!($($arg)+), actual, expected)
        }
      }
    }
  };
}

/// Negation of [`assert_eqish!`], with `assert_ne!`'s message layout.
#[macro_export]
macro_rules! assert_not_eqish {
  ($actual:expr, $expected:expr $(,)?) => {
    match (&$actual, &$expected) {
      (actual, expected) => {
        if $crate::Matcher::matches(expected, actual) {
          panic!("assertion `left != right` failed\n  left: {:?}\n right: {:?}", actual, expected)
        }
      }
    }
  };
  ($actual:expr, $expected:expr, $($arg:tt)+) => {
    match (&$actual, &$expected) {
      (actual, expected) => {
        if $crate::Matcher::matches(expected, actual) {
          panic!("assertion `left != right` failed: {}\n  left: {:?}\n right: {:?}", format_args!($($arg)+), actual, expected)
        }
      }
    }
  };
}
