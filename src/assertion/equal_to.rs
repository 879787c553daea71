use super::core::*;
use std::fmt::Debug;

pub trait EqualTo<E> {
  #[allow(clippy::wrong_self_convention)]
  fn to_equal(self, expected: E) -> Self;
}

impl<'a, T, E> EqualTo<E> for Subject<'a, T>
where
  T: PartialEq<E> + Debug + ?Sized,
  E: Debug,
{
  fn to_equal(self, expected: E) -> Self {
    let equal = self.subject().eq(&expected);
    report_equality(self, equal, &expected)
  }
}

/// Turns the outcome of an equality check into the standard equality failure,
/// honouring negation. Every equality-style expectation reports through here.
pub(crate) fn report_equality<'a, T, E>(subject: Subject<'a, T>, equal: bool, expected: &E) -> Subject<'a, T>
where
  T: Debug + ?Sized,
  E: Debug + ?Sized,
{
  let actual = subject.subject();
  if subject.is_negated() && equal {
    subject.mismatch().expecting(format!("<{:?}> not to equal <{:?}>", actual, expected)).found("was equal").fail()
  }
  if !subject.is_negated() && !equal {
    subject.mismatch().expecting(format!("<{:?}>", expected)).found(format!("<{:?}>", actual)).fail()
  }
  subject
}

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn compiles_with_different_expectations() {
    since("values should compile").expect(&1).to_equal(1);
    since("strings should compile").expect(&"one".to_string()).to_equal("one");
    since("negated values should compile").expect(&1).not().to_equal(2);
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: <2>\n\
                             \t   found: <1>\n\
                             at location.rs:42\n")]
  fn failure_message() {
    since("description should be displayed").expect(&1).at("location.rs:42").to_equal(2);
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: <1> not to equal <1>\n\
                             \t   found: was equal\n\
                             at location.rs:42\n")]
  fn inverted_failure_message() {
    since("description should be displayed").expect(&1).at("location.rs:42").not().to_equal(1);
  }
}
