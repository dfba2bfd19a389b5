//! Greedy measured word wrap.

use crate::render::surface::{FontFamily, Surface};

/// Break `text` into lines no wider than `max_width` points, measured with
/// the surface's metrics for `font` at `size`.
///
/// Wrapping is greedy and never splits inside a word: a single word wider
/// than `max_width` gets a line of its own and overflows. Runs of
/// whitespace collapse to single spaces. Always returns at least one line;
/// whitespace-only input yields one empty line, so blank-ish text still
/// occupies vertical space.
pub fn wrap<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    font: FontFamily,
    size: f32,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if surface.measure_width(&candidate, font, size) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
