//! HTML page assembly.
//!
//! [`HtmlWriter`] writes into any [`Write`] sink, so rendering can be tested
//! against a `Vec<u8>` without touching the filesystem.

use std::io::{self, Write};

use crate::diff::{blocks, escape, file_name, Block, DiffText, LineKind, RenderedLine};

const PROLOGUE: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Pretty Diff</title>
    <style>
        #wrapper {
            display: inline-block;
            margin-top: 1em;
            min-width: 800px;
            text-align: left;
        }

        h2 {
            background: #fafafa;
            background: linear-gradient(#fafafa, #eaeaea);
            border: 1px solid #d8d8d8;
            border-bottom: 0;
            color: #555;
            font: 14px sans-serif;
            overflow: hidden;
            padding: 10px 6px;
            text-shadow: 0 1px 0 white;
            margin: 0;
        }

        .file-diff {
            border: 1px solid #d8d8d8;
            margin-bottom: 1em;
            overflow: auto;
            padding: 0.5em 0;
        }

        .file-diff > div {
            width: 100%;
        }

        pre {
            margin: 0;
            font-family: "Bitstream Vera Sans Mono", Courier, monospace;
            font-size: 12px;
            line-height: 1.4em;
            text-indent: 0.5em;
        }

        .file {
            color: #aaa;
        }

        .delete {
            background-color: #fdd;
        }

        .insert {
            background-color: #dfd;
        }

        .info {
            color: #a0b;
        }

        .context {
            color: #333;
        }
    </style>
</head>
<body>
<div id="wrapper">"#;

const SECTION_OPEN: &str = "\n<div class='file-diff'><div>";
const SECTION_CLOSE: &str = "\n</div></div>";
const EPILOGUE: &str = "\n</div>\n</body>\n</html>\n";

/// Streams a diff page into `sink`.
pub struct HtmlWriter<W: Write> {
  sink:         W,
  sections:     usize,
  section_open: bool
}

impl<W: Write> HtmlWriter<W> {
  /// Writes the static prologue and returns a writer ready for blocks.
  pub fn new(mut sink: W) -> io::Result<Self> {
    sink.write_all(PROLOGUE.as_bytes())?;
    Ok(Self { sink, sections: 0, section_open: false })
  }

  /// Number of sections written so far.
  pub fn sections(&self) -> usize {
    self.sections
  }

  /// Renders one file block. Its header line closes the previous section
  /// and opens a new one under an `<h2>` with the file name.
  pub fn write_block(&mut self, block: &Block<'_>) -> io::Result<()> {
    for line in block.lines {
      self.write_line(line)?;
    }
    Ok(())
  }

  fn write_line(&mut self, line: &str) -> io::Result<()> {
    let rendered = RenderedLine::new(line);

    if rendered.kind == LineKind::FileHeader {
      self.open_section(line)?;
    }

    write!(self.sink, "\n{}", rendered.to_html())
  }

  fn open_section(&mut self, header: &str) -> io::Result<()> {
    self.close_section()?;
    write!(self.sink, "\n<h2>{}</h2>", escape(&file_name(header)))?;
    self.sink.write_all(SECTION_OPEN.as_bytes())?;
    self.section_open = true;
    self.sections += 1;
    Ok(())
  }

  fn close_section(&mut self) -> io::Result<()> {
    if self.section_open {
      self.sink.write_all(SECTION_CLOSE.as_bytes())?;
      self.section_open = false;
    }
    Ok(())
  }

  /// Closes the last section and the document, returning the sink and the
  /// number of sections written.
  pub fn finish(mut self) -> io::Result<(W, usize)> {
    self.close_section()?;
    self.sink.write_all(EPILOGUE.as_bytes())?;
    self.sink.flush()?;
    Ok((self.sink, self.sections))
  }
}

/// Renders a whole diff into `sink`, returning it with the section count.
pub fn render<W: Write>(text: &DiffText, sink: W) -> io::Result<(W, usize)> {
  let lines = text.lines();
  let blocks = blocks(&lines);
  log::debug!("Rendering {} block(s) from {} line(s)", blocks.len(), lines.len());

  let mut writer = HtmlWriter::new(sink)?;
  for block in &blocks {
    writer.write_block(block)?;
  }
  writer.finish()
}

/// Convenience wrapper rendering into a `String`.
pub fn render_to_string(text: &DiffText) -> io::Result<String> {
  let (bytes, _) = render(text, Vec::new())?;
  String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
