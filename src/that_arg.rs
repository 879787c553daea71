use std::borrow::Cow;
use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::matcher::Matcher;

/// Builds an [`ArgThat`] and remembers the predicate's source text, so that
/// failure messages show the condition instead of an opaque closure.
#[macro_export]
macro_rules! arg_that {
  ($pred:expr) => {
    $crate::ArgThat::described(stringify!($pred), $pred)
  };
}

/// A value that is equal to everything its predicate accepts.
///
/// Put it where an expected literal would go. Any comparison against it,
/// from either side, evaluates the predicate on the other operand.
pub struct ArgThat<'a, T: ?Sized> {
  predicate: Box<dyn Fn(&T) -> bool + 'a>,
  description: Option<Cow<'static, str>>,
}

pub fn arg_that<'a, T, F>(predicate: F) -> ArgThat<'a, T>
where
  T: ?Sized,
  F: Fn(&T) -> bool + 'a,
{
  ArgThat::new(predicate)
}

impl<'a, T: ?Sized> ArgThat<'a, T> {
  pub fn new<F>(predicate: F) -> Self
  where
    F: Fn(&T) -> bool + 'a,
  {
    ArgThat {
      predicate: Box::new(predicate),
      description: None,
    }
  }

  pub fn described<D, F>(description: D, predicate: F) -> Self
  where
    D: Into<Cow<'static, str>>,
    F: Fn(&T) -> bool + 'a,
  {
    ArgThat {
      predicate: Box::new(predicate),
      description: Some(description.into()),
    }
  }

  /// Fails with [`Error::InvalidArgument`] when no predicate is supplied.
  pub fn try_from_option<F>(predicate: Option<F>) -> Result<Self>
  where
    F: Fn(&T) -> bool + 'a,
  {
    predicate
      .map(ArgThat::new)
      .ok_or_else(|| Error::InvalidArgument("arg_that requires a predicate".to_string()))
  }

  pub fn description(&self) -> Option<&str> {
    self.description.as_deref()
  }

  /// Evaluates the predicate against `actual`. A panicking predicate unwinds
  /// through this call untouched.
  pub fn matches(&self, actual: &T) -> bool {
    let matched = (self.predicate)(actual);
    trace!(predicate = %self, matched, "evaluated predicate");
    matched
  }
}

impl<'a, T: ?Sized> Matcher<T> for ArgThat<'a, T> {
  fn matches(&self, actual: &T) -> bool {
    ArgThat::matches(self, actual)
  }
}

impl<'a, T: ?Sized> fmt::Display for ArgThat<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.description().unwrap_or("<predicate>"))
  }
}

impl<'a, T: ?Sized> fmt::Debug for ArgThat<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "arg_that({})", self)
  }
}

impl<'a, T: ?Sized> PartialEq<T> for ArgThat<'a, T> {
  fn eq(&self, other: &T) -> bool {
    self.matches(other)
  }
}

macro_rules! eq_arg_that {
  ($($t:ty),*) => {
    $(
      impl<'a> PartialEq<ArgThat<'a, $t>> for $t {
        fn eq(&self, other: &ArgThat<'a, $t>) -> bool {
          other.matches(self)
        }
      }
    )*
  };
}

scalar_types!(eq_arg_that);
eq_arg_that!(str);
