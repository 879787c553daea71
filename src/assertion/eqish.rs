use super::core::*;
use super::equal_to::report_equality;
use crate::matcher::Matcher;
use std::fmt::Debug;

/// Equality where the expected side decides, so predicates embedded in the
/// expected value are honoured. Failures read exactly like [`to_equal`]'s.
///
/// [`to_equal`]: super::EqualTo::to_equal
pub trait Eqish<E> {
  #[allow(clippy::wrong_self_convention)]
  fn to_eqish(self, expected: E) -> Self;
}

impl<'a, T, E> Eqish<E> for Subject<'a, T>
where
  T: Debug + ?Sized,
  E: Matcher<T> + Debug,
{
  fn to_eqish(self, expected: E) -> Self {
    let equal = expected.matches(self.subject());
    report_equality(self, equal, &expected)
  }
}
