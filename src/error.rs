//! Error types for the tagdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for tagdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while compiling or rendering documents.
///
/// Malformed tags are never an error: unrecognized or mismatched markup
/// degrades to plain text or defaults, so compilation either runs to
/// completion or does not start at all.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text is empty or whitespace-only.
    #[error("Empty input: nothing to compile")]
    EmptyInput,

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}
