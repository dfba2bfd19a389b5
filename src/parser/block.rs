//! Block scanner: classifies each line of the document into a [`Block`].
//!
//! The grammar is flat: every line stands alone except table spans, which
//! greedily consume consecutive pipe lines. There is no nesting and no
//! multi-line paragraphs; a blank line is itself a block.

use crate::ast::Block;
use crate::parser::lexer;
use crate::sanitize::sanitize;

/// Iterator over the blocks of a markdown document.
pub struct BlockScanner<'a> {
    lines: Vec<&'a str>,
    index: usize,
}

impl<'a> BlockScanner<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.split('\n').collect(),
            index: 0,
        }
    }

    /// Collect a run of consecutive pipe lines starting at the current
    /// position and assemble them into a table. The second line is the
    /// separator row and is discarded without inspection. Returns `None`
    /// when fewer than two pipe lines were found, in which case the span
    /// produces no block at all.
    fn collect_table(&mut self) -> Option<Block> {
        let start = self.index;
        while self.index < self.lines.len() && self.lines[self.index].contains('|') {
            self.index += 1;
        }
        let run = &self.lines[start..self.index];
        if run.len() < 2 {
            log::warn!("dropping malformed table span of {} line(s)", run.len());
            return None;
        }
        let header = parse_row(run[0]);
        let rows: Vec<Vec<String>> = run[2..]
            .iter()
            .map(|line| parse_row(line))
            .filter(|cells| !cells.is_empty())
            .collect();
        Some(Block::Table { header, rows })
    }
}

impl Iterator for BlockScanner<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        while self.index < self.lines.len() {
            let stripped = self.lines[self.index].trim();
            if stripped.contains('|') && stripped.starts_with('|') {
                match self.collect_table() {
                    Some(block) => return Some(block),
                    None => continue,
                }
            }
            self.index += 1;
            return Some(classify_line(stripped));
        }
        None
    }
}

/// Split a pipe row into trimmed, sanitized cells. The empty fragments
/// produced by a leading or trailing `|` are dropped; empty cells in the
/// interior of the row are kept so columns stay aligned.
fn parse_row(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    while cells.first().map_or(false, |c| c.is_empty()) {
        cells.remove(0);
    }
    while cells.last().map_or(false, |c| c.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(sanitize).collect()
}

fn classify_line(stripped: &str) -> Block {
    if lexer::thematic_break(stripped).is_ok() {
        return Block::HorizontalRule;
    }
    if let Ok((_, text)) = lexer::block_quote(stripped) {
        return Block::BlockQuote {
            text: sanitize(text),
        };
    }
    if let Ok((_, (level, text))) = lexer::heading(stripped) {
        return Block::Heading {
            level,
            text: sanitize(text),
        };
    }
    if let Ok((_, text)) = lexer::bullet_item(stripped) {
        return Block::BulletItem {
            text: sanitize(text),
        };
    }
    if let Ok((_, (digits, text))) = lexer::numbered_item(stripped) {
        return Block::NumberedItem {
            marker: format!("{}.", digits),
            text: sanitize(text),
        };
    }
    if stripped.is_empty() {
        return Block::Blank;
    }
    Block::Paragraph {
        text: sanitize(stripped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(content: &str) -> Vec<Block> {
        BlockScanner::new(content).collect()
    }

    #[test]
    fn test_classify_heading() {
        assert_eq!(
            scan("## Section"),
            vec![Block::Heading {
                level: 2,
                text: "Section".into()
            }]
        );
    }

    #[test]
    fn test_classify_lists() {
        assert_eq!(
            scan("- one\n* two\n3. three"),
            vec![
                Block::BulletItem { text: "one".into() },
                Block::BulletItem { text: "two".into() },
                Block::NumberedItem {
                    marker: "3.".into(),
                    text: "three".into()
                },
            ]
        );
    }

    #[test]
    fn test_classify_quote_rule_blank_paragraph() {
        assert_eq!(
            scan("> wise words\n---\n\nplain text"),
            vec![
                Block::BlockQuote {
                    text: "wise words".into()
                },
                Block::HorizontalRule,
                Block::Blank,
                Block::Paragraph {
                    text: "plain text".into()
                },
            ]
        );
    }

    #[test]
    fn test_indented_lines_classify_by_stripped_text() {
        assert_eq!(
            scan("   # Indented"),
            vec![Block::Heading {
                level: 1,
                text: "Indented".into()
            }]
        );
    }

    #[test]
    fn test_sanitize_applied_to_text() {
        assert_eq!(
            scan("em \u{2014} dash"),
            vec![Block::Paragraph {
                text: "em - dash".into()
            }]
        );
    }

    #[test]
    fn test_table_collection() {
        let blocks = scan("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\nafter");
        assert_eq!(
            blocks,
            vec![
                Block::Table {
                    header: vec!["A".into(), "B".into()],
                    rows: vec![
                        vec!["1".into(), "2".into()],
                        vec!["3".into(), "4".into()],
                    ],
                },
                Block::Paragraph {
                    text: "after".into()
                },
            ]
        );
    }

    #[test]
    fn test_table_separator_discarded_unconditionally() {
        // Whatever sits on line two is thrown away, valid separator or not.
        let blocks = scan("| A |\n| not dashes |\n| 1 |");
        assert_eq!(
            blocks,
            vec![Block::Table {
                header: vec!["A".into()],
                rows: vec![vec!["1".into()]],
            }]
        );
    }

    #[test]
    fn test_short_table_span_dropped() {
        assert_eq!(
            scan("| lonely |\nafter"),
            vec![Block::Paragraph {
                text: "after".into()
            }]
        );
    }

    #[test]
    fn test_header_only_table() {
        assert_eq!(
            scan("| A | B |\n|---|---|"),
            vec![Block::Table {
                header: vec!["A".into(), "B".into()],
                rows: vec![],
            }]
        );
    }

    #[test]
    fn test_pipe_line_not_starting_with_pipe_is_paragraph() {
        assert_eq!(
            scan("a | b"),
            vec![Block::Paragraph { text: "a | b".into() }]
        );
    }

    #[test]
    fn test_row_edge_cells_dropped_interior_kept() {
        assert_eq!(parse_row("| a |  | c |"), vec!["a", "", "c"]);
        assert_eq!(parse_row("a | b"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_rows_filtered() {
        let blocks = scan("| A |\n|---|\n| |\n| 1 |");
        assert_eq!(
            blocks,
            vec![Block::Table {
                header: vec!["A".into()],
                rows: vec![vec!["1".into()]],
            }]
        );
    }
}
