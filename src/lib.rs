pub mod config;
pub mod diff;
pub mod error;
pub mod opener;
pub mod pipeline;
pub mod render;
pub mod revision;
pub mod source;

// Re-exports
pub use error::{Error, Result};
pub use pipeline::{Outcome, Pipeline};
pub use revision::Revision;
