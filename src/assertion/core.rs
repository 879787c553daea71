use tracing::debug;

#[macro_export]
macro_rules! since {
  (&$description:expr) => {
    $crate::since!($description)
  };
  ($description:expr) => {
    $crate::assertion::Locatable::at($crate::assertion::since(&$description), format!("{}:{}", file!(), line!()))
  };
}

#[macro_export]
macro_rules! expect {
  (&$subject:expr) => {
    $crate::expect!($subject)
  };
  ($subject:expr) => {
    $crate::assertion::Locatable::at($crate::assertion::expect(&$subject), format!("{}:{}", file!(), line!()))
  };
}

pub trait Locatable<T> {
  fn at(self, location: T) -> Self;
}

impl<L> Locatable<&str> for L
where
  L: Locatable<String>,
{
  fn at(self, location: &str) -> Self {
    self.at(location.to_string())
  }
}

/// Why an expectation should hold; printed above the failure.
pub struct Description {
  description: Option<String>,
  location: Option<String>,
}

pub fn since(description: &str) -> Description {
  Description {
    description: Some(description.to_string()),
    location: None,
  }
}

impl Description {
  pub fn expect<S: ?Sized>(self, subject: &S) -> Subject<'_, S> {
    Subject {
      subject,
      negated: false,
      description: self.description,
      location: self.location,
    }
  }
}

impl Locatable<String> for Description {
  fn at(mut self, location: String) -> Self {
    self.location = Some(location);
    self
  }
}

pub fn expect<S: ?Sized>(subject: &S) -> Subject<'_, S> {
  Subject {
    subject,
    negated: false,
    description: None,
    location: None,
  }
}

/// The actual value under test, plus everything needed to report on it.
pub struct Subject<'a, S: ?Sized> {
  subject: &'a S,
  negated: bool,
  description: Option<String>,
  location: Option<String>,
}

impl<'a, S: ?Sized> Subject<'a, S> {
  pub fn subject(&self) -> &'a S {
    self.subject
  }

  pub fn is_negated(&self) -> bool {
    self.negated
  }

  #[allow(clippy::should_implement_trait)]
  pub fn not(mut self) -> Self {
    self.negated = !self.negated;
    self
  }

  pub fn mismatch(&self) -> Mismatch {
    Mismatch {
      description: self.description.clone(),
      expected: None,
      found: None,
      location: self.location.clone(),
    }
  }
}

impl<'a, S: ?Sized> Locatable<String> for Subject<'a, S> {
  fn at(mut self, location: String) -> Self {
    self.location = Some(location);
    self
  }
}

pub struct Mismatch {
  description: Option<String>,
  expected: Option<String>,
  found: Option<String>,
  location: Option<String>,
}

impl Mismatch {
  pub fn expecting(mut self, expected: impl Into<String>) -> Self {
    self.expected = Some(expected.into());
    self
  }

  pub fn found(mut self, found: impl Into<String>) -> Self {
    self.found = Some(found.into());
    self
  }

  pub fn fail(self) -> ! {
    debug!(expected = ?self.expected, found = ?self.found, location = ?self.location, "expectation failed");

    let location = self.location.map_or_else(String::new, |location| format!("at {}\n", location));

    let description = self.description.map_or_else(String::new, |description| format!("\n{}:", description));

    let expected = self.expected.unwrap_or_else(|| panic!("\n\tNo expectation \n{}", location));

    let found = self.found.unwrap_or_else(|| panic!("\n\tNo actual value \n{}", location));

    panic!(
      "{}\n\
       \texpected: {}\n\
       \t   found: {}\n\
       {}",
      description, expected, found, location
    )
  }
}
