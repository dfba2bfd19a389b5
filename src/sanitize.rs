//! Unicode punctuation normalization.
//!
//! The Type1 base fonts drawn through WinAnsi encoding cannot represent a
//! number of common Unicode punctuation variants; left alone they render as
//! black squares and, worse, measure differently than they draw. Every block
//! of text (and the document title) passes through here before any width
//! measurement, so wrapping and glyph output always agree.

/// Replace Unicode dash variants, smart quotes, and the ellipsis with ASCII
/// equivalents. Pure and total; unrecognized characters pass through.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            // Em dash, en dash, minus sign, Unicode hyphen, non-breaking
            // hyphen, figure dash, horizontal bar.
            '\u{2014}' | '\u{2013}' | '\u{2212}' | '\u{2010}' | '\u{2011}' | '\u{2012}'
            | '\u{2015}' => out.push('-'),
            // Smart double quotes.
            '\u{201C}' | '\u{201D}' => out.push('"'),
            // Smart single quotes.
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2026}' => out.push_str("..."),
            _ => out.push(c),
        }
    }
    out
}
