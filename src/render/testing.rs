//! Recording surface for layout tests: captures every drawing command so
//! tests can assert exact positions without decoding PDF bytes. Measurement
//! uses the real font metrics so wrapping behaves as in production.

use crate::error::RenderError;
use crate::render::metrics;
use crate::render::surface::{FontFamily, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetFont(FontFamily, f32),
    Text { x: f32, y: f32, text: String },
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Line { x0: f32, y0: f32, x1: f32, y1: f32 },
    NewPage,
}

#[derive(Default)]
pub struct TestSurface {
    commands: Vec<Command>,
}

impl TestSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// All text commands as `(x, y, text)` in draw order.
    pub fn texts(&self) -> Vec<(f32, f32, String)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { x, y, text } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn pages(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::NewPage))
            .count()
            + 1
    }
}

impl Surface for TestSurface {
    fn set_font(&mut self, font: FontFamily, size: f32) {
        self.commands.push(Command::SetFont(font, size));
    }

    fn measure_width(&self, text: &str, font: FontFamily, size: f32) -> f32 {
        metrics::text_width(text, font, size)
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.commands.push(Command::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(Command::Rect {
            x,
            y,
            w: width,
            h: height,
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.commands.push(Command::Line { x0, y0, x1, y1 });
    }

    fn new_page(&mut self) {
        self.commands.push(Command::NewPage);
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        Ok(Vec::new())
    }
}
