//! Error types for the git-prettydiff pipeline.
//!
//! Every failure is terminal for the run. An empty diff is not an error and
//! is reported through [`crate::pipeline::Outcome::NoChanges`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code git uses for usage errors, which is what `git diff` returns
/// when run outside of a repository.
pub const GIT_USAGE_EXIT_CODE: i32 = 129;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Do not have access to {}: {source}", .path.display())]
  Environment {
    path:   PathBuf,
    #[source]
    source: std::io::Error
  },

  #[error("Not a git repository")]
  NotARepository,

  #[error("Please provide a valid commit ID (40 hex characters), got `{0}`")]
  InvalidRevision(String),

  #[error("Failed to run `{program}`: {source}")]
  Spawn {
    program: String,
    #[source]
    source:  std::io::Error
  },

  #[error("git diff exited with status {code}: {stderr}")]
  DiffCommand { code: i32, stderr: String },

  #[error(transparent)]
  Config(#[from] anyhow::Error)
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  /// Wraps an IO error on one of the artifact paths.
  pub fn environment(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Error::Environment { path: path.into(), source }
  }

  /// Process exit code for this error. All failures share the same code.
  pub fn exit_code(&self) -> u8 {
    1
  }
}
