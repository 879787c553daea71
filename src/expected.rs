use std::fmt;

use crate::matcher::Matcher;
use crate::that_arg::ArgThat;

/// Builds a `Vec<Expected<_>>` from literals and `that(predicate)` entries.
///
/// ```
/// use arg_that::expected;
///
/// assert_eq!(vec![5, 6, 1], expected![5, 6, that(|x: &i32| *x < 2)]);
/// ```
#[macro_export]
macro_rules! expected {
  (@collect [$($out:expr),*]) => {
    ::std::vec![$($out),*]
  };
  (@collect [$($out:expr),*] that($pred:expr) $(, $($rest:tt)*)?) => {
    $crate::expected!(@collect [$($out,)* $crate::Expected::That($crate::arg_that!($pred))] $($($rest)*)?)
  };
  (@collect [$($out:expr),*] $value:expr $(, $($rest:tt)*)?) => {
    $crate::expected!(@collect [$($out,)* $crate::Expected::Value($value)] $($($rest)*)?)
  };
  ($($input:tt)*) => {
    $crate::expected!(@collect [] $($input)*)
  };
}

/// Builds a `HashMap<_, Expected<_>>`; values are literals or `that(predicate)`.
#[macro_export]
macro_rules! expected_map {
  (@collect $map:ident) => {};
  (@collect $map:ident $key:expr => that($pred:expr) $(, $($rest:tt)*)?) => {
    $map.insert($key, $crate::Expected::That($crate::arg_that!($pred)));
    $crate::expected_map!(@collect $map $($($rest)*)?);
  };
  (@collect $map:ident $key:expr => $value:expr $(, $($rest:tt)*)?) => {
    $map.insert($key, $crate::Expected::Value($value));
    $crate::expected_map!(@collect $map $($($rest)*)?);
  };
  ($($input:tt)*) => {{
    let mut map = ::std::collections::HashMap::new();
    $crate::expected_map!(@collect map $($input)*);
    map
  }};
}

/// An expected element that is either a literal or a predicate, so both can
/// share one container.
pub enum Expected<'a, T> {
  Value(T),
  That(ArgThat<'a, T>),
}

impl<'a, T: PartialEq> Matcher<T> for Expected<'a, T> {
  fn matches(&self, actual: &T) -> bool {
    match self {
      Expected::Value(expected) => expected == actual,
      Expected::That(predicate) => predicate.matches(actual),
    }
  }
}

impl<'a, T> From<T> for Expected<'a, T> {
  fn from(value: T) -> Self {
    Expected::Value(value)
  }
}

impl<'a, T> From<ArgThat<'a, T>> for Expected<'a, T> {
  fn from(predicate: ArgThat<'a, T>) -> Self {
    Expected::That(predicate)
  }
}

impl<'a, T: fmt::Debug> fmt::Debug for Expected<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expected::Value(value) => value.fmt(f),
      Expected::That(predicate) => predicate.fmt(f),
    }
  }
}

impl<'a, T: PartialEq> PartialEq<T> for Expected<'a, T> {
  fn eq(&self, other: &T) -> bool {
    self.matches(other)
  }
}

macro_rules! eq_expected {
  ($($t:ty),*) => {
    $(
      impl<'a> PartialEq<Expected<'a, $t>> for $t {
        fn eq(&self, other: &Expected<'a, $t>) -> bool {
          other.matches(self)
        }
      }
    )*
  };
}

scalar_types!(eq_expected);
