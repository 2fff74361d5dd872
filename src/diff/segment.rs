//! Splitting captured diff output into per-file blocks.

use std::ops::Range;

/// The token that opens a file section in `git diff` output.
const HEADER_TOKEN: &str = "diff";

/// Captured stdout of the diff command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffText {
  raw: String
}

impl DiffText {
  pub fn new(raw: impl Into<String>) -> Self {
    Self { raw: raw.into() }
  }

  /// True when the diff command printed nothing at all.
  pub fn is_empty(&self) -> bool {
    self.raw.is_empty()
  }

  pub fn as_str(&self) -> &str {
    &self.raw
  }

  /// Lines of the captured text, split on `\n` only so a `\r` from CRLF
  /// content stays part of its line. A final newline does not produce a
  /// trailing empty line.
  pub fn lines(&self) -> Vec<&str> {
    let mut lines: Vec<&str> = self.raw.split('\n').collect();
    if lines.last() == Some(&"") {
      lines.pop();
    }
    lines
  }
}

impl From<String> for DiffText {
  fn from(raw: String) -> Self {
    Self::new(raw)
  }
}

impl From<&str> for DiffText {
  fn from(raw: &str) -> Self {
    Self::new(raw)
  }
}

/// One file's section of the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
  /// Index of the header line in the whole diff
  pub start: usize,
  pub lines: &'a [&'a str]
}

impl Block<'_> {
  pub fn range(&self) -> Range<usize> {
    self.start..self.start + self.lines.len()
  }
}

/// Whether `line` opens a new file section. The first whitespace-delimited
/// token has to be `diff`, so context such as `different` does not match.
pub fn is_file_header(line: &str) -> bool {
  line.split_whitespace().next() == Some(HEADER_TOKEN) && line.starts_with(HEADER_TOKEN)
}

/// Indices of every file header line, ascending.
pub fn boundaries(lines: &[&str]) -> Vec<usize> {
  lines
    .iter()
    .enumerate()
    .filter(|(_, line)| is_file_header(line))
    .map(|(index, _)| index)
    .collect()
}

/// Splits `lines` into blocks at each boundary. Lines before the first
/// header belong to no block.
pub fn blocks<'a>(lines: &'a [&'a str]) -> Vec<Block<'a>> {
  let starts = boundaries(lines);

  if let Some(&first) = starts.first() {
    if first > 0 {
      log::debug!("Skipping {first} line(s) before the first file header");
    }
  }

  starts
    .iter()
    .enumerate()
    .map(|(i, &start)| {
      let end = starts.get(i + 1).copied().unwrap_or(lines.len());
      Block { start, lines: &lines[start..end] }
    })
    .collect()
}
