use std::{
  fmt::{Display, Formatter},
  ops::{Deref, DerefMut},
};

use crate::MonkeyError;

/// A build can fail for several reasons at once, so errors are collected rather than
/// short-circuited at the first one.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Whether any of the collected errors is the given kind of [MonkeyError].
  pub fn contains(&self, predicate: impl Fn(&MonkeyError) -> bool) -> bool {
    self.0.iter().filter_map(|err| err.downcast_ref::<MonkeyError>()).any(predicate)
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for (idx, err) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{err:#}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<MonkeyError> for BuildError {
  fn from(error: MonkeyError) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_build_error_contains() {
  let err = BuildError::from(MonkeyError::MissingProgramChunk);
  assert!(err.contains(|e| matches!(e, MonkeyError::MissingProgramChunk)));
  assert!(!err.contains(|e| matches!(e, MonkeyError::UnsupportedResourceType { .. })));

  let err = BuildError::from(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")]);
  assert_eq!(err.len(), 2);
  assert_eq!(err.to_string(), "first\nsecond");
}
