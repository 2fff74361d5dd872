use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Length of a full SHA-1 commit hash.
pub const REVISION_LEN: usize = 40;

/// A full commit hash that `git diff` can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl FromStr for Revision {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.len() == REVISION_LEN && s.chars().all(|c| c.is_ascii_hexdigit()) {
      Ok(Revision(s.to_string()))
    } else {
      Err(Error::InvalidRevision(s.to_string()))
    }
  }
}

impl fmt::Display for Revision {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
