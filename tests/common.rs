#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use prettydiff::diff::DiffText;
use prettydiff::opener::Opener;
use prettydiff::source::{DiffSource, GitDiff};
use prettydiff::Revision;
use tempfile::TempDir;

pub struct TestRepo {
  pub repo:      git2::Repository,
  pub repo_path: TempDir,
  pub out_path:  TempDir
}

impl Default for TestRepo {
  fn default() -> Self {
    let repo_path = TempDir::new().unwrap();
    let out_path = TempDir::new().unwrap();
    let repo = git2::Repository::init(repo_path.path()).unwrap();

    Self { repo, repo_path, out_path }
  }
}

impl TestRepo {
  pub fn path(&self) -> &Path {
    self.repo_path.path()
  }

  pub fn write(&self, name: &str, content: &str) -> Result<()> {
    std::fs::write(self.path().join(name), content)?;
    Ok(())
  }

  pub fn commit_all(&self, message: &str) -> Result<git2::Oid> {
    let mut index = self.repo.index()?;
    index.add_all(["*"], git2::IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let oid = index.write_tree()?;
    let tree = self.repo.find_tree(oid)?;
    let signature = git2::Signature::now("Your Name", "email@example.com")?;

    let parent = match self.repo.head() {
      Ok(head) => Some(head.peel_to_commit()?),
      Err(e) if e.code() == git2::ErrorCode::UnbornBranch || e.code() == git2::ErrorCode::NotFound => None,
      Err(e) => return Err(e.into())
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    Ok(self.repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?)
  }

  pub fn text_artifact(&self) -> PathBuf {
    self.out_path.path().join("diff.txt")
  }

  pub fn html_artifact(&self) -> PathBuf {
    self.out_path.path().join("diff.html")
  }

  pub fn git_diff(&self) -> GitDiff {
    GitDiff::new("git", self.text_artifact()).current_dir(self.path())
  }
}

/// Serves fixed diff text without spawning git.
pub struct FakeSource {
  pub text:  Option<String>,
  pub calls: RefCell<usize>
}

impl FakeSource {
  pub fn new(text: &str) -> Self {
    Self { text: Some(text.to_string()), calls: RefCell::new(0) }
  }

  pub fn not_a_repository() -> Self {
    Self { text: None, calls: RefCell::new(0) }
  }
}

impl DiffSource for FakeSource {
  fn capture(&self, _revision: Option<&Revision>) -> prettydiff::Result<DiffText> {
    *self.calls.borrow_mut() += 1;
    match &self.text {
      Some(text) => Ok(DiffText::new(text.as_str())),
      None => Err(prettydiff::Error::NotARepository)
    }
  }
}

/// Records every path it is asked to open.
#[derive(Default)]
pub struct RecordingOpener {
  pub opened: RefCell<Vec<PathBuf>>
}

impl Opener for RecordingOpener {
  fn open(&self, path: &Path) -> Result<()> {
    self.opened.borrow_mut().push(path.to_path_buf());
    Ok(())
  }
}

pub struct FailingOpener;

impl Opener for FailingOpener {
  fn open(&self, path: &Path) -> Result<()> {
    bail!("No default viewer for {}", path.display())
  }
}
