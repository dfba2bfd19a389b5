//! Page layout: block placement, pagination, and the document driver.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ast::{Block, Style};
use crate::error::Result;
use crate::parser::{parse_runs, BlockScanner};
use crate::render::surface::{FontFamily, LopdfSurface, Surface};
use crate::render::table::layout_table;
use crate::render::wrap::wrap;
use crate::sanitize::sanitize;

/// Baseline-to-baseline distance for body text.
pub(crate) const LINE_HEIGHT: f32 = 14.0;

const TITLE_SIZE: f32 = 18.0;
const TITLE_OFFSET: f32 = 80.0;
const FIRST_CONTENT_OFFSET: f32 = 120.0;
const BODY_SIZE: f32 = 11.0;
const LIST_MARKER_INDENT: f32 = 10.0;
const LIST_TEXT_INDENT: f32 = 25.0;
const QUOTE_INDENT: f32 = 20.0;

/// Supported page formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    /// Page dimensions as `(width, height)` in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::A4 => (595.0, 842.0),
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top: 72.0,
            bottom: 72.0,
            left: 72.0,
            right: 72.0,
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    pub paper_size: PaperSize,
    pub margins: PageMargins,
}

/// Cursor state threaded through block layout: the surface, the current
/// baseline position, and the page geometry.
pub struct LayoutContext<'a, S: Surface> {
    pub surface: &'a mut S,
    pub y: f32,
    pub page: usize,
    pub page_width: f32,
    pub page_height: f32,
    pub margins: PageMargins,
}

impl<'a, S: Surface> LayoutContext<'a, S> {
    pub fn new(surface: &'a mut S, page_width: f32, page_height: f32, margins: PageMargins) -> Self {
        Self {
            surface,
            y: page_height - FIRST_CONTENT_OFFSET,
            page: 1,
            page_width,
            page_height,
            margins,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - self.margins.left - self.margins.right
    }

    fn right_margin(&self) -> f32 {
        self.page_width - self.margins.right
    }

    /// Break the page if the cursor has descended past the bottom margin.
    pub fn ensure_space(&mut self) {
        if self.y < self.margins.bottom {
            self.break_page();
        }
    }

    /// Break the page if a block of `height` points would not fit above the
    /// bottom margin. Breaks at most once; an oversized block is drawn on
    /// its own page and allowed to overflow.
    pub fn ensure_room(&mut self, height: f32) {
        if self.y - height < self.margins.bottom {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        self.surface.new_page();
        self.page += 1;
        self.y = self.page_height - self.margins.top;
        log::debug!("page break, starting page {}", self.page);
    }

    /// Draw a line's styled runs left to right starting at `x`, advancing
    /// by each run's measured width.
    pub(crate) fn draw_runs(&mut self, line: &str, x: f32, y: f32, base: FontFamily, size: f32) {
        let mut x = x;
        for run in parse_runs(line) {
            let font = match run.style {
                Style::Plain => base,
                Style::Bold => FontFamily::HelveticaBold,
                Style::Italic => FontFamily::HelveticaOblique,
                Style::Code => FontFamily::Courier,
            };
            self.surface.set_font(font, size);
            self.surface.draw_text(x, y, &run.text);
            x += self.surface.measure_width(&run.text, font, size);
        }
    }

    fn layout_block(&mut self, block: &Block) {
        self.ensure_space();
        match block {
            Block::Heading { level, text } => self.layout_heading(*level, text),
            Block::BulletItem { text } => self.layout_list_item("\u{2022}", text),
            Block::NumberedItem { marker, text } => self.layout_list_item(marker, text),
            Block::BlockQuote { text } => self.layout_quote(text),
            Block::HorizontalRule => self.layout_rule(),
            Block::Table { header, rows } => layout_table(self, header, rows),
            Block::Paragraph { text } => self.layout_paragraph(text),
            Block::Blank => self.y -= LINE_HEIGHT / 2.0,
        }
    }

    /// Headings draw their text plainly; inline delimiters inside a heading
    /// are not interpreted.
    fn layout_heading(&mut self, level: u8, text: &str) {
        let (size, advance) = match level {
            1 => (15.0, LINE_HEIGHT + 4.0),
            2 => (13.0, LINE_HEIGHT + 2.0),
            _ => (11.0, LINE_HEIGHT),
        };
        let font = FontFamily::HelveticaBold;
        for line in wrap(self.surface, text, font, size, self.content_width()) {
            self.ensure_space();
            self.surface.set_font(font, size);
            self.surface.draw_text(self.margins.left, self.y, &line);
            self.y -= advance;
        }
    }

    fn layout_paragraph(&mut self, text: &str) {
        let font = FontFamily::Helvetica;
        for line in wrap(self.surface, text, font, BODY_SIZE, self.content_width()) {
            self.ensure_space();
            self.draw_runs(&line, self.margins.left, self.y, font, BODY_SIZE);
            self.y -= LINE_HEIGHT;
        }
    }

    /// Bullet and numbered items share a shape: the marker hangs in the
    /// gutter on the first line, continuation lines align with the text.
    fn layout_list_item(&mut self, marker: &str, text: &str) {
        let font = FontFamily::Helvetica;
        let budget = self.content_width() - LIST_TEXT_INDENT;
        let lines = wrap(self.surface, text, font, BODY_SIZE, budget);
        for (index, line) in lines.iter().enumerate() {
            self.ensure_space();
            if index == 0 {
                self.surface.set_font(font, BODY_SIZE);
                self.surface
                    .draw_text(self.margins.left + LIST_MARKER_INDENT, self.y, marker);
            }
            self.draw_runs(line, self.margins.left + LIST_TEXT_INDENT, self.y, font, BODY_SIZE);
            self.y -= LINE_HEIGHT;
        }
    }

    /// Quotes are set in oblique type, indented, and drawn plainly.
    fn layout_quote(&mut self, text: &str) {
        let font = FontFamily::HelveticaOblique;
        let budget = self.content_width() - QUOTE_INDENT;
        for line in wrap(self.surface, text, font, BODY_SIZE, budget) {
            self.ensure_space();
            self.surface.set_font(font, BODY_SIZE);
            self.surface
                .draw_text(self.margins.left + QUOTE_INDENT, self.y, &line);
            self.y -= LINE_HEIGHT;
        }
    }

    fn layout_rule(&mut self) {
        self.surface
            .draw_line(self.margins.left, self.y, self.right_margin(), self.y);
        self.y -= LINE_HEIGHT;
    }
}

/// Render a titled document onto `surface`: centered title, then each
/// block of `content` in order, paginating as the cursor reaches the
/// bottom margin.
pub fn render_document<S: Surface>(
    surface: &mut S,
    title: &str,
    content: &str,
    config: &PdfConfig,
) {
    let (page_width, page_height) = config.paper_size.dimensions();
    let mut ctx = LayoutContext::new(surface, page_width, page_height, config.margins);

    let title = sanitize(title);
    let title_font = FontFamily::HelveticaBold;
    let title_width = ctx.surface.measure_width(&title, title_font, TITLE_SIZE);
    ctx.surface.set_font(title_font, TITLE_SIZE);
    ctx.surface.draw_text(
        (page_width - title_width) / 2.0,
        page_height - TITLE_OFFSET,
        &title,
    );

    let mut blocks = 0usize;
    for block in BlockScanner::new(content) {
        ctx.layout_block(&block);
        blocks += 1;
    }
    log::debug!("rendered {} blocks over {} page(s)", blocks, ctx.page);
}

/// Render markdown to an in-memory PDF.
pub fn render_pdf(title: &str, content: &str, config: &PdfConfig) -> Result<Vec<u8>> {
    let (page_width, page_height) = config.paper_size.dimensions();
    let mut surface = LopdfSurface::new(page_width, page_height);
    render_document(&mut surface, title, content, config);
    Ok(surface.finish()?)
}

/// Render markdown and write the PDF to `path`.
pub fn render_pdf_to_file(
    title: &str,
    content: &str,
    config: &PdfConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = render_pdf(title, content, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
