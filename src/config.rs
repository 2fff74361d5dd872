use std::path::{Path, PathBuf};

use serde::Deserialize;
use config::{Config, FileFormat};
use anyhow::{Context, Result};
use lazy_static::lazy_static;

// Constants
const DEFAULT_TEXT_FILE: &str = "diff.txt";
const DEFAULT_HTML_FILE: &str = "diff.html";
const DEFAULT_GIT: &str = "git";
const ENV_PREFIX: &str = "PRETTYDIFF";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct App {
  pub output_dir: PathBuf,
  pub text_file:  String,
  pub html_file:  String,
  pub git:        String,
  pub open:       bool
}

/// Where the two per-run files live. Both are overwritten on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
  pub text: PathBuf,
  pub html: PathBuf
}

lazy_static! {
  static ref CONFIG_FILE: Option<PathBuf> = home::home_dir().map(|home| home.join(".config/git-prettydiff/config.ini"));
}

impl App {
  /// Loads defaults, then `~/.config/git-prettydiff/config.ini` if present,
  /// then `PRETTYDIFF_*` environment variables.
  pub fn new() -> Result<Self> {
    dotenv::dotenv().ok();
    Self::load(CONFIG_FILE.as_deref())
  }

  /// Same as [`App::new`] with an explicit (optional) INI file.
  pub fn load(file: Option<&Path>) -> Result<Self> {
    Self::load_with_env(file, config::Environment::with_prefix(ENV_PREFIX))
  }

  /// Layers `env` over the INI file over the defaults.
  pub fn load_with_env(file: Option<&Path>, env: config::Environment) -> Result<Self> {
    let mut builder = Config::builder()
      .set_default("output_dir", std::env::temp_dir().to_string_lossy().into_owned())?
      .set_default("text_file", DEFAULT_TEXT_FILE)?
      .set_default("html_file", DEFAULT_HTML_FILE)?
      .set_default("git", DEFAULT_GIT)?
      .set_default("open", true)?;

    if let Some(file) = file {
      log::debug!("Reading config from {}", file.display());
      builder = builder.add_source(config::File::new(file.to_string_lossy().as_ref(), FileFormat::Ini).required(false));
    }

    let config = builder
      .add_source(env.try_parsing(true))
      .build()
      .context("Failed to load git-prettydiff config")?;

    config
      .try_deserialize()
      .context("Failed to deserialize git-prettydiff config")
  }

  pub fn artifacts(&self) -> Artifacts {
    Artifacts {
      text: self.output_dir.join(&self.text_file),
      html: self.output_dir.join(&self.html_file)
    }
  }
}
