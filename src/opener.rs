use std::path::Path;

use anyhow::{Context, Result};

/// Opens a file with whatever the host considers its default application.
pub trait Opener {
  fn open(&self, path: &Path) -> Result<()>;
}

impl<T: Opener + ?Sized> Opener for &T {
  fn open(&self, path: &Path) -> Result<()> {
    (**self).open(path)
  }
}

/// Hands the file to the desktop's default handler (`xdg-open`, `open`,
/// `start`, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Opener for SystemOpener {
  fn open(&self, path: &Path) -> Result<()> {
    log::debug!("Opening {} in the default viewer", path.display());
    open::that(path).with_context(|| format!("Failed to open {}", path.display()))
  }
}
