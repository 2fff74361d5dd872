//! Line classification and escaping.

use std::borrow::Cow;

use crate::diff::segment::is_file_header;

/// Category of a single diff line, derived from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
  Deletion,
  Insertion,
  FileHeader,
  HunkHeader,
  Index,
  Context
}

impl LineKind {
  /// Classifies `line`. Earlier rules win: `-`, `+`, `diff`, `@`, `index`,
  /// then everything else is context.
  pub fn classify(line: &str) -> Self {
    if line.starts_with('-') {
      LineKind::Deletion
    } else if line.starts_with('+') {
      LineKind::Insertion
    } else if is_file_header(line) {
      LineKind::FileHeader
    } else if line.starts_with('@') {
      LineKind::HunkHeader
    } else if line.starts_with("index") {
      LineKind::Index
    } else {
      LineKind::Context
    }
  }

  /// CSS class used by the page stylesheet. Hunk headers share the file
  /// header style.
  pub fn class(&self) -> &'static str {
    match self {
      LineKind::Deletion => "delete",
      LineKind::Insertion => "insert",
      LineKind::FileHeader | LineKind::HunkHeader => "file",
      LineKind::Index => "info",
      LineKind::Context => "context"
    }
  }
}

/// A classified line with its HTML metacharacters escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine<'a> {
  pub kind: LineKind,
  pub text: Cow<'a, str>
}

impl<'a> RenderedLine<'a> {
  pub fn new(line: &'a str) -> Self {
    Self { kind: LineKind::classify(line), text: escape(line) }
  }

  pub fn to_html(&self) -> String {
    format!("<pre class='{}'>{}</pre>", self.kind.class(), self.text)
  }
}

/// Escapes `&`, `<` and `>` in a single pass, so existing entities in the
/// input are escaped exactly once.
pub fn escape(line: &str) -> Cow<'_, str> {
  html_escape::encode_text(line)
}

/// Extracts the displayed file name from a `diff` header line.
///
/// The third token carries the old path with git's mnemonic prefix
/// (`a/`, `b/`, `c/`, `i/`, `o/`, `w/`), which is stripped. Paths git quoted
/// because of non-ASCII or control characters are unquoted first. Headers
/// without such a prefix, like `diff --cc path`, keep the token as-is.
/// Headers with fewer than three tokens fall back to the whole line.
pub fn file_name(header: &str) -> Cow<'_, str> {
  let rest = skip_token(skip_token(header)).trim_start();
  if rest.is_empty() {
    return Cow::Borrowed(header.trim());
  }

  if rest.starts_with('"') {
    if let Some(path) = unquote(rest) {
      return Cow::Owned(strip_mnemonic(&path).to_string());
    }
  }

  let path = rest.split_whitespace().next().unwrap_or(rest);
  Cow::Borrowed(strip_mnemonic(path))
}

fn skip_token(s: &str) -> &str {
  let s = s.trim_start();
  let end = s.find(char::is_whitespace).unwrap_or(s.len());
  &s[end..]
}

fn strip_mnemonic(path: &str) -> &str {
  let bytes = path.as_bytes();
  let has_mnemonic_prefix =
    bytes.len() > 2 && bytes[1] == b'/' && matches!(bytes[0], b'a' | b'b' | b'c' | b'i' | b'o' | b'w');

  if has_mnemonic_prefix {
    &path[2..]
  } else {
    path
  }
}

/// Decodes a C-style quoted path as printed by git (`"a/caf\303\251.txt"`).
/// Returns `None` when the closing quote is missing.
fn unquote(quoted: &str) -> Option<String> {
  let mut bytes = quoted.bytes().skip(1);
  let mut out = Vec::with_capacity(quoted.len());

  while let Some(byte) = bytes.next() {
    match byte {
      b'"' => return Some(String::from_utf8_lossy(&out).into_owned()),
      b'\\' => {
        let escaped = bytes.next()?;
        match escaped {
          b'a' => out.push(0x07),
          b'b' => out.push(0x08),
          b't' => out.push(b'\t'),
          b'n' => out.push(b'\n'),
          b'v' => out.push(0x0b),
          b'f' => out.push(0x0c),
          b'r' => out.push(b'\r'),
          b'0'..=b'7' => {
            let mut value = u32::from(escaped - b'0');
            for _ in 0..2 {
              let digit = bytes.next()?;
              if !(b'0'..=b'7').contains(&digit) {
                return None;
              }
              value = value * 8 + u32::from(digit - b'0');
            }
            out.push(u8::try_from(value).ok()?);
          },
          other => out.push(other)
        }
      },
      other => out.push(other)
    }
  }

  None
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_classification_samples() {
    let cases = [
      ("diff --git a/x.txt b/x.txt", LineKind::FileHeader),
      ("-removed line", LineKind::Deletion),
      ("+added line", LineKind::Insertion),
      ("@@ -1,2 +1,2 @@", LineKind::HunkHeader),
      ("index abc123..def456", LineKind::Index),
      ("unchanged line", LineKind::Context),
    ];

    for (line, expected) in cases {
      assert_eq!(LineKind::classify(line), expected, "line: {line:?}");
    }
  }

  #[test]
  fn test_file_markers_are_deletions_and_insertions() {
    assert_eq!(LineKind::classify("--- a/x.txt"), LineKind::Deletion);
    assert_eq!(LineKind::classify("+++ b/x.txt"), LineKind::Insertion);
  }

  #[test]
  fn test_context_that_merely_starts_with_diff() {
    assert_eq!(LineKind::classify("different"), LineKind::Context);
    assert_eq!(LineKind::classify(" diff --git a/x b/x"), LineKind::Context);
    assert_eq!(LineKind::classify(""), LineKind::Context);
  }

  #[test]
  fn test_classes() {
    assert_eq!(LineKind::Deletion.class(), "delete");
    assert_eq!(LineKind::Insertion.class(), "insert");
    assert_eq!(LineKind::FileHeader.class(), "file");
    assert_eq!(LineKind::HunkHeader.class(), "file");
    assert_eq!(LineKind::Index.class(), "info");
    assert_eq!(LineKind::Context.class(), "context");
  }

  #[test]
  fn test_escape_once() {
    assert_eq!(escape("if a < b && c > d"), "if a &lt; b &amp;&amp; c &gt; d");
    assert_eq!(escape("&lt;"), "&amp;lt;");
    assert_eq!(escape("plain"), "plain");
  }

  #[test]
  fn test_escape_round_trips() {
    let line = "+<a href=\"x?y=1&z=2\">&amp;</a>";
    let escaped = escape(line);
    assert_eq!(html_escape::decode_html_entities(&escaped), line);
  }

  #[test]
  fn test_rendered_line_html() {
    let line = RenderedLine::new("-Vec<u8>");
    assert_eq!(line.kind, LineKind::Deletion);
    assert_eq!(line.to_html(), "<pre class='delete'>-Vec&lt;u8&gt;</pre>");
  }

  #[test]
  fn test_file_name_strips_prefix() {
    assert_eq!(file_name("diff --git a/src/main.rs b/src/main.rs"), "src/main.rs");
    assert_eq!(file_name("diff --git i/index.rs w/index.rs"), "index.rs");
  }

  #[test]
  fn test_file_name_without_prefix() {
    assert_eq!(file_name("diff --cc src/lib.rs"), "src/lib.rs");
    assert_eq!(file_name("diff --git x.txt x.txt"), "x.txt");
  }

  #[test]
  fn test_file_name_of_quoted_path() {
    assert_eq!(file_name("diff --git \"a/caf\\303\\251.txt\" \"b/caf\\303\\251.txt\""), "café.txt");
    assert_eq!(file_name("diff --git \"a/say \\\"hi\\\".txt\" \"b/say \\\"hi\\\".txt\""), "say \"hi\".txt");
    assert_eq!(file_name("diff --git \"a/tab\\there\" \"b/tab\\there\""), "tab\there");
  }

  #[test]
  fn test_file_name_unterminated_quote_is_kept() {
    assert_eq!(file_name("diff --git \"a/broken"), "\"a/broken");
  }

  #[test]
  fn test_file_name_short_header() {
    assert_eq!(file_name("diff --git"), "diff --git");
  }
}
