//! Data model: classified blocks and styled runs.
//!
//! There is no document tree. The scanner classifies lines into `Block`
//! values one at a time and the layout engine consumes each immediately;
//! `StyledRun`s exist only for the single wrapped line being drawn.

/// A classified unit of the document.
///
/// Classification is line-local except `Table`, which greedily consumes the
/// whole contiguous run of pipe-containing lines. Block text is already
/// sanitized; inline delimiters (`**`, `*`, `` ` ``) are preserved for the
/// inline tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `# `, `## `, or `### ` heading; level is 1..=3.
    Heading { level: u8, text: String },
    /// `- ` or `* ` list item.
    BulletItem { text: String },
    /// `N. ` list item; `marker` is the literal numeral plus period.
    NumberedItem { marker: String, text: String },
    /// `> ` quote line.
    BlockQuote { text: String },
    /// A line of three or more `-`, `_`, or `*` characters.
    HorizontalRule,
    /// Header cells plus data rows; the separator row is already discarded.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Paragraph { text: String },
    /// Empty line; advances the cursor by half a line, draws nothing.
    Blank,
}

/// An inline style recognized by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Bold,
    Italic,
    Code,
}

/// A maximal span of text sharing one inline style.
///
/// Concatenating the texts of a line's runs, in order, reconstructs the line
/// with its recognized delimiters stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}
