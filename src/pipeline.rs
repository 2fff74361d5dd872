//! The capture → segment → render → open pipeline.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::opener::Opener;
use crate::render::render;
use crate::revision::Revision;
use crate::source::DiffSource;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The diff command printed nothing. No page was written.
  NoChanges,
  Rendered {
    path:     PathBuf,
    sections: usize,
    /// Set when the viewer could not be launched; the page is still on disk.
    warning:  Option<String>
  }
}

pub struct Pipeline<S, O> {
  source:      S,
  opener:      O,
  html:        PathBuf,
  open_viewer: bool
}

impl<S: DiffSource, O: Opener> Pipeline<S, O> {
  pub fn new(source: S, opener: O, html: impl Into<PathBuf>) -> Self {
    Self { source, opener, html: html.into(), open_viewer: true }
  }

  /// Skip launching the viewer after the page is written.
  pub fn open_viewer(mut self, open: bool) -> Self {
    self.open_viewer = open;
    self
  }

  pub fn run(&self, revision: Option<&Revision>) -> Result<Outcome> {
    let text = self.source.capture(revision)?;

    if text.is_empty() {
      log::debug!("Diff command produced no output");
      return Ok(Outcome::NoChanges);
    }

    let file = File::create(&self.html).map_err(|err| Error::environment(&self.html, err))?;
    let (_, sections) = render(&text, BufWriter::new(file)).map_err(|err| Error::environment(&self.html, err))?;
    log::debug!("Wrote {} section(s) to {}", sections, self.html.display());

    let warning = if self.open_viewer {
      self.opener.open(&self.html).err().map(|err| {
        log::warn!("{err:#}");
        format!("{err:#}")
      })
    } else {
      None
    };

    Ok(Outcome::Rendered { path: self.html.clone(), sections, warning })
  }
}
