//! Capturing `git diff` output.

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::diff::{DiffText, Utf8String};
use crate::error::{Error, Result, GIT_USAGE_EXIT_CODE};
use crate::revision::Revision;

/// Something that can produce diff text for an optional revision.
pub trait DiffSource {
  fn capture(&self, revision: Option<&Revision>) -> Result<DiffText>;
}

impl<T: DiffSource + ?Sized> DiffSource for &T {
  fn capture(&self, revision: Option<&Revision>) -> Result<DiffText> {
    (**self).capture(revision)
  }
}

/// Runs `git diff` and keeps its stdout in a text artifact on disk.
#[derive(Debug, Clone)]
pub struct GitDiff {
  program:  String,
  artifact: PathBuf,
  workdir:  Option<PathBuf>
}

impl GitDiff {
  pub fn new(program: impl Into<String>, artifact: impl Into<PathBuf>) -> Self {
    Self {
      program:  program.into(),
      artifact: artifact.into(),
      workdir:  None
    }
  }

  /// Runs git in `dir` instead of the process working directory.
  pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.workdir = Some(dir.into());
    self
  }

  fn command(&self, revision: Option<&Revision>) -> Command {
    let mut cmd = Command::new(&self.program);
    cmd.arg("diff");

    if let Some(revision) = revision {
      cmd.arg(revision.as_str());
    }

    if let Some(dir) = &self.workdir {
      cmd.current_dir(dir);
    }

    cmd
  }
}

impl DiffSource for GitDiff {
  fn capture(&self, revision: Option<&Revision>) -> Result<DiffText> {
    let file = File::create(&self.artifact).map_err(|err| Error::environment(&self.artifact, err))?;

    let mut cmd = self.command(revision);
    log::debug!("Running {:?} > {}", cmd, self.artifact.display());

    let output = cmd
      .stdout(Stdio::from(file))
      .stderr(Stdio::piped())
      .output()
      .map_err(|source| Error::Spawn { program: self.program.clone(), source })?;

    match output.status.code() {
      Some(0) => {},
      Some(GIT_USAGE_EXIT_CODE) => return Err(Error::NotARepository),
      code => {
        return Err(Error::DiffCommand {
          code:   code.unwrap_or(-1),
          stderr: output.stderr.to_utf8().trim().to_string()
        })
      },
    }

    let bytes = fs::read(&self.artifact).map_err(|err| Error::environment(&self.artifact, err))?;
    log::debug!("Captured {} byte(s) of diff output", bytes.len());

    Ok(DiffText::new(bytes.to_utf8()))
  }
}
