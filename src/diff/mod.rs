//! Diff text processing.
//!
//! This module splits captured `git diff` output into per-file blocks
//! and classifies each line of a block for rendering.

pub mod line;
pub mod segment;
pub mod traits;

pub use line::{escape, file_name, LineKind, RenderedLine};
pub use segment::{blocks, boundaries, is_file_header, Block, DiffText};
pub use traits::Utf8String;
