//! Advance-width tables for the base fonts.
//!
//! Widths come from the Adobe AFM files for the standard 14 fonts, in
//! 1/1000ths of an em, covering the printable ASCII range 0x20..=0x7E.
//! Courier is fixed pitch at 600 units. Characters outside the table
//! measure as `?`, matching how the surface encodes them.

use crate::render::surface::FontFamily;

/// Width of `text` in points when set in `font` at `size`.
pub fn text_width(text: &str, font: FontFamily, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, font))).sum();
    units as f32 * size / 1000.0
}

fn char_width(c: char, font: FontFamily) -> u16 {
    if font == FontFamily::Courier {
        return 600;
    }
    let table = match font {
        FontFamily::HelveticaBold => &HELVETICA_BOLD,
        _ => &HELVETICA,
    };
    match c {
        '\u{20}'..='\u{7e}' => table[c as usize - 0x20],
        // Bullet, WinAnsi 0x95.
        '\u{2022}' => 350,
        _ => table['?' as usize - 0x20],
    }
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];
