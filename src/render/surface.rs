//! Drawing surface abstraction and the `lopdf` backend.
//!
//! All coordinates are in PDF space: points, origin at the bottom-left
//! corner of the page, y increasing upward.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::error::RenderError;
use crate::render::metrics;

/// The four base fonts the renderer draws with. All are standard Type1
/// fonts every PDF viewer ships, so nothing gets embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    Courier,
}

impl FontFamily {
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::HelveticaBold => "Helvetica-Bold",
            FontFamily::HelveticaOblique => "Helvetica-Oblique",
            FontFamily::Courier => "Courier",
        }
    }

    /// Name under which the font is registered in each page's resource
    /// dictionary.
    fn resource_name(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "F1",
            FontFamily::HelveticaBold => "F2",
            FontFamily::HelveticaOblique => "F3",
            FontFamily::Courier => "F4",
        }
    }

    fn all() -> [FontFamily; 4] {
        [
            FontFamily::Helvetica,
            FontFamily::HelveticaBold,
            FontFamily::HelveticaOblique,
            FontFamily::Courier,
        ]
    }
}

/// A drawing target for the layout engine.
///
/// The layout code issues absolute-position commands and never reads back
/// state; `measure_width` is the only query, and it must agree with how
/// `draw_text` will advance so wrapped lines fit the widths they were
/// measured at.
pub trait Surface {
    /// Select the font and size used by subsequent `draw_text` calls.
    fn set_font(&mut self, font: FontFamily, size: f32);

    /// Width of `text` in points when set in `font` at `size`.
    fn measure_width(&self, text: &str, font: FontFamily, size: f32) -> f32;

    /// Draw `text` with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str);

    /// Stroke an unfilled rectangle with bottom-left corner at `(x, y)`.
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Stroke a straight line from `(x0, y0)` to `(x1, y1)`.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);

    /// Close the current page and start a fresh one.
    fn new_page(&mut self);

    /// Close the final page and serialize the document.
    fn finish(self) -> Result<Vec<u8>, RenderError>;
}

/// `Surface` backed by `lopdf`, producing a real PDF document.
pub struct LopdfSurface {
    page_width: f32,
    page_height: f32,
    pages: Vec<Content>,
    current: Content,
    font: FontFamily,
    size: f32,
}

impl LopdfSurface {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            pages: Vec::new(),
            current: Content {
                operations: Vec::new(),
            },
            font: FontFamily::Helvetica,
            size: 11.0,
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.current
            .operations
            .push(Operation::new(operator, operands));
    }
}

impl Surface for LopdfSurface {
    fn set_font(&mut self, font: FontFamily, size: f32) {
        self.font = font;
        self.size = size;
    }

    fn measure_width(&self, text: &str, font: FontFamily, size: f32) -> f32 {
        metrics::text_width(text, font, size)
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        let font = self.font;
        let size = self.size;
        self.op("BT", vec![]);
        self.op(
            "Tf",
            vec![
                Object::Name(font.resource_name().as_bytes().to_vec()),
                size.into(),
            ],
        );
        self.op("Td", vec![x.into(), y.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.op("re", vec![x.into(), y.into(), width.into(), height.into()]);
        self.op("S", vec![]);
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.op("w", vec![1f32.into()]);
        self.op("m", vec![x0.into(), y0.into()]);
        self.op("l", vec![x1.into(), y1.into()]);
        self.op("S", vec![]);
    }

    fn new_page(&mut self) {
        let finished = std::mem::replace(
            &mut self.current,
            Content {
                operations: Vec::new(),
            },
        );
        self.pages.push(finished);
    }

    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        self.new_page();

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for family in FontFamily::all() {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => family.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(family.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for content in &self.pages {
            let encoded = content
                .encode()
                .map_err(|e| RenderError::Content(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0f32.into(),
                    0f32.into(),
                    self.page_width.into(),
                    self.page_height.into(),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| RenderError::Finalize(e.to_string()))?;
        Ok(bytes)
    }
}

/// Encode text as WinAnsi bytes. Latin-1 code points map straight through;
/// the bullet glyph sits at 0x95 in WinAnsi; anything else becomes `?`.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95,
            _ if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}
