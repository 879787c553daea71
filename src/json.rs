use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::matcher::Matcher;
use crate::that_arg::ArgThat;

/// An expected JSON document that may hold predicates at any depth.
///
/// Literal parts compare with `Value`'s own equality, so there is no coercion
/// between types: `1` and `"1"` differ. A predicate receives the actual value
/// at its position as is, including `null`, arrays and objects.
pub enum Pattern<'a> {
  Value(Value),
  Array(Vec<Pattern<'a>>),
  Object(BTreeMap<String, Pattern<'a>>),
  That(ArgThat<'a, Value>),
}

impl<'a> Pattern<'a> {
  pub fn array<I, P>(elements: I) -> Self
  where
    I: IntoIterator<Item = P>,
    P: Into<Pattern<'a>>,
  {
    Pattern::Array(elements.into_iter().map(Into::into).collect())
  }

  pub fn object<I, K, P>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, P)>,
    K: Into<String>,
    P: Into<Pattern<'a>>,
  {
    Pattern::Object(entries.into_iter().map(|(key, pattern)| (key.into(), pattern.into())).collect())
  }
}

impl<'a> Matcher<Value> for Pattern<'a> {
  fn matches(&self, actual: &Value) -> bool {
    match (self, actual) {
      (Pattern::Value(expected), actual) => expected == actual,
      (Pattern::That(predicate), actual) => predicate.matches(actual),
      (Pattern::Array(expected), Value::Array(actual)) => expected.as_slice().matches(actual.as_slice()),
      (Pattern::Object(expected), Value::Object(actual)) => {
        expected.len() == actual.len() && expected.iter().all(|(key, expected)| actual.get(key).is_some_and(|actual| expected.matches(actual)))
      }
      _ => false,
    }
  }
}

impl<'a> From<Value> for Pattern<'a> {
  fn from(value: Value) -> Self {
    Pattern::Value(value)
  }
}

impl<'a> From<ArgThat<'a, Value>> for Pattern<'a> {
  fn from(predicate: ArgThat<'a, Value>) -> Self {
    Pattern::That(predicate)
  }
}

impl<'a> fmt::Debug for Pattern<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Pattern::Value(value) => write!(f, "{}", value),
      Pattern::Array(elements) => f.debug_list().entries(elements).finish(),
      Pattern::Object(entries) => f.debug_map().entries(entries).finish(),
      Pattern::That(predicate) => predicate.fmt(f),
    }
  }
}

impl<'a> PartialEq<Value> for Pattern<'a> {
  fn eq(&self, other: &Value) -> bool {
    self.matches(other)
  }
}

impl<'a> PartialEq<Pattern<'a>> for Value {
  fn eq(&self, other: &Pattern<'a>) -> bool {
    other.matches(self)
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::arg_that;
  use crate::assertion::*;
  use serde_json::json;

  #[test]
  fn catch_all_matches_every_kind_of_value() {
    let anything = Pattern::from(arg_that!(|_: &Value| true));
    for actual in [json!(null), json!(1), json!("1"), json!(true), json!([1, 2]), json!({"a": 1})] {
      since("anything goes").expect(&(actual == anything)).to_equal(true);
    }
  }

  #[test]
  fn refusal_matches_no_value() {
    let nothing = Pattern::from(arg_that!(|_: &Value| false));
    for actual in [json!(null), json!(1), json!("1"), json!(true), json!([1, 2]), json!({"a": 1})] {
      since("nothing goes").expect(&(actual == nothing)).to_equal(false);
    }
  }

  #[test]
  fn does_not_coerce_types() {
    let is_string = Pattern::from(arg_that!(|v: &Value| v.is_string()));
    since("number").expect(&(json!(1) == is_string)).to_equal(false);
    since("string").expect(&(json!("1") == is_string)).to_equal(true);
    since("literal number against string").expect(&(json!("1") == Pattern::from(json!(1)))).to_equal(false);
  }

  #[test]
  fn predicates_nest_in_arrays() {
    let small = Pattern::array([json!(5).into(), json!(6).into(), Pattern::from(arg_that!(|v: &Value| v.as_i64().is_some_and(|x| x < 2)))]);
    let large = Pattern::array([json!(5).into(), json!(6).into(), Pattern::from(arg_that!(|v: &Value| v.as_i64().is_some_and(|x| x > 1)))]);
    since("third element is small").expect(&(json!([5, 6, 1]) == small)).to_equal(true);
    since("third element is not larger than one").expect(&(json!([5, 6, 1]) == large)).to_equal(false);
    since("length differs").expect(&(json!([5, 6]) == small)).to_equal(false);
  }

  #[test]
  fn predicates_nest_in_objects() {
    let expected = Pattern::object([
      ("a", Pattern::from(json!(1))),
      ("b", Pattern::from(arg_that!(|v: &Value| v.as_i64().is_some_and(|x| x > 98 && x < 100)))),
    ]);
    since("b is in range").expect(&(json!({"a": 1, "b": 99}) == expected)).to_equal(true);
    since("b is out of range").expect(&(json!({"a": 1, "b": 100}) == expected)).to_equal(false);
    since("extra key").expect(&(json!({"a": 1, "b": 99, "c": 0}) == expected)).to_equal(false);
    since("not an object").expect(&(json!([1, 99]) == expected)).to_equal(false);
  }

  #[test]
  fn predicate_receives_null_for_absent_values() {
    let expected = Pattern::object([("a", Pattern::from(arg_that!(|v: &Value| v.is_null())))]);
    since("null is passed through").expect(&(json!({"a": null}) == expected)).to_equal(true);
    since("a missing key is not null").expect(&(json!({}) == expected)).to_equal(false);
  }

  #[test]
  fn debug_shows_structure() {
    let expected = Pattern::object([("a", Pattern::from(json!(1))), ("b", Pattern::from(arg_that!(|v: &Value| v.is_null())))]);
    since("format").expect(&format!("{:?}", expected)).to_equal("{\"a\": 1, \"b\": arg_that(|v: &Value| v.is_null())}");
  }
}
