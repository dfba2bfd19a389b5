//! Render a flat markdown subset into paginated PDF documents.
//!
//! The input grammar is line oriented: every line is classified on its own,
//! with no nesting and no multi-line paragraphs. Supported constructs:
//!
//! - Headings `#`, `##`, `###`
//! - Bullet lists (`-` or `*`) and numbered lists (`1.`)
//! - Block quotes (`> `)
//! - Horizontal rules (`---`)
//! - Pipe tables with a discarded separator row
//! - Inline `**bold**`, `*italic*`, and `` `code` `` in paragraphs, list
//!   items, and table cells
//!
//! Text is set in the standard Type1 fonts with real advance-width metrics,
//! so word wrap and column fitting are measured rather than guessed, and
//! content flows onto new pages as it reaches the bottom margin.
//!
//! # Quick start
//!
//! ```
//! let bytes = markdown_pdf::create_document("Report", "# Hello\n\nThis is *great*.").unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```
//!
//! Page geometry is configurable through [`PdfConfig`], and the layout
//! engine is generic over the [`Surface`] trait for callers that want to
//! record or redirect drawing commands.

pub mod ast;
pub mod error;
pub mod parser;
pub mod render;
pub mod sanitize;

pub use ast::{Block, Style, StyledRun};
pub use error::{Error, RenderError, Result};
pub use render::{
    render_pdf, render_pdf_to_file, FontFamily, LopdfSurface, PageMargins, PaperSize, PdfConfig,
    Surface,
};
pub use sanitize::sanitize;

/// Render `content` under a centered `title` with default page geometry,
/// returning the PDF bytes.
pub fn create_document(title: &str, content: &str) -> Result<Vec<u8>> {
    render_pdf(title, content, &PdfConfig::default())
}
