//! Layout and PDF rendering.

mod layout;
mod metrics;
mod surface;
mod table;
mod wrap;

#[cfg(test)]
pub(crate) mod testing;

pub use layout::{
    render_document, render_pdf, render_pdf_to_file, LayoutContext, PageMargins, PaperSize,
    PdfConfig,
};
pub use surface::{FontFamily, LopdfSurface, Surface};
pub use wrap::wrap;
