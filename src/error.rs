//! Error types for the markdown-pdf library.

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the rendering surface.
///
/// Malformed markdown never reaches this taxonomy: every input line maps to
/// some block kind and is drawn, possibly degraded (literal delimiters,
/// dropped table spans, overflowing words). Only a surface that cannot
/// encode or write its output fails the conversion, and no partial result
/// is returned in that case.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to encode page content: {0}")]
    Content(String),

    #[error("Failed to write document: {0}")]
    Finalize(String),
}
