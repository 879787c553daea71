use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Equality as seen from the expected side.
///
/// The expected value decides whether it matches the actual value. Containers
/// forward the decision to their elements, so a predicate nested anywhere in an
/// expected structure is evaluated against the actual value at the same place,
/// whatever that value's own `PartialEq` says.
pub trait Matcher<A: ?Sized> {
  fn matches(&self, actual: &A) -> bool;
}

pub fn smart_eq<E, A>(expected: &E, actual: &A) -> bool
where
  E: Matcher<A> + ?Sized,
  A: ?Sized,
{
  expected.matches(actual)
}

/// Matches by the wrapped value's `PartialEq`, for types without a
/// [`Matcher`] of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exactly<T>(pub T);

pub fn exactly<T>(value: T) -> Exactly<T> {
  Exactly(value)
}

impl<T: PartialEq> Matcher<T> for Exactly<T> {
  fn matches(&self, actual: &T) -> bool {
    self.0 == *actual
  }
}

macro_rules! literal_matcher {
  ($($t:ty),*) => {
    $(
      impl Matcher<$t> for $t {
        fn matches(&self, actual: &$t) -> bool {
          self == actual
        }
      }
    )*
  };
}

scalar_types!(literal_matcher);
literal_matcher!(str);

impl<'e, 'a> Matcher<&'a str> for &'e str {
  fn matches(&self, actual: &&'a str) -> bool {
    *self == *actual
  }
}

impl<'e> Matcher<String> for &'e str {
  fn matches(&self, actual: &String) -> bool {
    *self == actual.as_str()
  }
}

fn pairwise<'e, 'a, E, A>(expected: impl ExactSizeIterator<Item = &'e E>, actual: impl ExactSizeIterator<Item = &'a A>) -> bool
where
  E: Matcher<A> + 'e,
  A: 'a,
{
  expected.len() == actual.len() && expected.zip(actual).all(|(expected, actual)| expected.matches(actual))
}

impl<E, A> Matcher<[A]> for [E]
where
  E: Matcher<A>,
{
  fn matches(&self, actual: &[A]) -> bool {
    pairwise(self.iter(), actual.iter())
  }
}

impl<E, A, const N: usize> Matcher<[A; N]> for [E; N]
where
  E: Matcher<A>,
{
  fn matches(&self, actual: &[A; N]) -> bool {
    pairwise(self.iter(), actual.iter())
  }
}

impl<E, A> Matcher<Vec<A>> for Vec<E>
where
  E: Matcher<A>,
{
  fn matches(&self, actual: &Vec<A>) -> bool {
    pairwise(self.iter(), actual.iter())
  }
}

impl<E, A> Matcher<[A]> for Vec<E>
where
  E: Matcher<A>,
{
  fn matches(&self, actual: &[A]) -> bool {
    pairwise(self.iter(), actual.iter())
  }
}

impl<E, A> Matcher<VecDeque<A>> for VecDeque<E>
where
  E: Matcher<A>,
{
  fn matches(&self, actual: &VecDeque<A>) -> bool {
    pairwise(self.iter(), actual.iter())
  }
}

impl<E, A> Matcher<Option<A>> for Option<E>
where
  E: Matcher<A>,
{
  fn matches(&self, actual: &Option<A>) -> bool {
    match (self, actual) {
      (Some(expected), Some(actual)) => expected.matches(actual),
      (None, None) => true,
      _ => false,
    }
  }
}

impl<E, A> Matcher<Box<A>> for Box<E>
where
  E: Matcher<A> + ?Sized,
  A: ?Sized,
{
  fn matches(&self, actual: &Box<A>) -> bool {
    (**self).matches(&**actual)
  }
}

macro_rules! tuple_matcher {
  ($(($($e:ident $a:ident $idx:tt),+)),*) => {
    $(
      impl<$($e, $a),+> Matcher<($($a,)+)> for ($($e,)+)
      where
        $($e: Matcher<$a>),+
      {
        fn matches(&self, actual: &($($a,)+)) -> bool {
          true $(&& self.$idx.matches(&actual.$idx))+
        }
      }
    )*
  };
}

tuple_matcher!(
  (E0 A0 0),
  (E0 A0 0, E1 A1 1),
  (E0 A0 0, E1 A1 1, E2 A2 2),
  (E0 A0 0, E1 A1 1, E2 A2 2, E3 A3 3)
);

impl<K, E, A, SE, SA> Matcher<HashMap<K, A, SA>> for HashMap<K, E, SE>
where
  K: Eq + Hash,
  E: Matcher<A>,
  SE: BuildHasher,
  SA: BuildHasher,
{
  fn matches(&self, actual: &HashMap<K, A, SA>) -> bool {
    self.len() == actual.len() && self.iter().all(|(key, expected)| actual.get(key).is_some_and(|actual| expected.matches(actual)))
  }
}

impl<K, E, A> Matcher<BTreeMap<K, A>> for BTreeMap<K, E>
where
  K: Ord,
  E: Matcher<A>,
{
  fn matches(&self, actual: &BTreeMap<K, A>) -> bool {
    self.len() == actual.len() && self.iter().all(|(key, expected)| actual.get(key).is_some_and(|actual| expected.matches(actual)))
  }
}
