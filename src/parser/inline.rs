//! Inline tokenizer: splits a single line into styled runs.

use crate::ast::{Style, StyledRun};
use crate::parser::lexer;

/// Split a line into a flat sequence of styled runs.
///
/// Delimiters do not nest: the first closing delimiter ends a span, and the
/// span's contents are taken literally. An opening delimiter with no matching
/// closer is emitted as literal text. Adjacent plain characters are merged
/// into a single run, and a line with no delimiters yields one plain run.
pub fn parse_runs(line: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut remaining = line;

    while !remaining.is_empty() {
        let first = remaining.chars().next().unwrap_or_default();
        if first == '*' || first == '`' {
            if let Some((rest, run)) = try_parse_delimited(remaining) {
                if !plain.is_empty() {
                    runs.push(StyledRun::new(std::mem::take(&mut plain), Style::Plain));
                }
                runs.push(run);
                remaining = rest;
            } else {
                // No closing delimiter: the character is literal text.
                plain.push(first);
                remaining = &remaining[first.len_utf8()..];
            }
        } else {
            let next = remaining
                .find(|c| c == '*' || c == '`')
                .unwrap_or(remaining.len());
            plain.push_str(&remaining[..next]);
            remaining = &remaining[next..];
        }
    }

    if !plain.is_empty() {
        runs.push(StyledRun::new(plain, Style::Plain));
    }
    runs
}

fn try_parse_delimited(input: &str) -> Option<(&str, StyledRun)> {
    if let Ok((rest, text)) = lexer::strong(input) {
        return Some((rest, StyledRun::new(text, Style::Bold)));
    }
    if let Ok((rest, text)) = lexer::emphasis(input) {
        return Some((rest, StyledRun::new(text, Style::Italic)));
    }
    if let Ok((rest, text)) = lexer::inline_code(input) {
        return Some((rest, StyledRun::new(text, Style::Code)));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_line() {
        assert_eq!(
            parse_runs("just text"),
            vec![StyledRun::new("just text", Style::Plain)]
        );
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            parse_runs("a **b** c *d* e"),
            vec![
                StyledRun::new("a ", Style::Plain),
                StyledRun::new("b", Style::Bold),
                StyledRun::new(" c ", Style::Plain),
                StyledRun::new("d", Style::Italic),
                StyledRun::new(" e", Style::Plain),
            ]
        );
    }

    #[test]
    fn test_code_span() {
        assert_eq!(
            parse_runs("run `cargo test` now"),
            vec![
                StyledRun::new("run ", Style::Plain),
                StyledRun::new("cargo test", Style::Code),
                StyledRun::new(" now", Style::Plain),
            ]
        );
    }

    #[test]
    fn test_unclosed_delimiter_is_literal() {
        assert_eq!(
            parse_runs("broken *span"),
            vec![StyledRun::new("broken *span", Style::Plain)]
        );
        assert_eq!(
            parse_runs("tick ` alone"),
            vec![StyledRun::new("tick ` alone", Style::Plain)]
        );
    }

    #[test]
    fn test_no_nesting() {
        // The inner asterisk closes the bold span early.
        assert_eq!(
            parse_runs("**a*b**"),
            vec![
                StyledRun::new("a*b", Style::Bold),
            ]
        );
    }

    #[test]
    fn test_adjacent_spans() {
        assert_eq!(
            parse_runs("**a**`b`"),
            vec![
                StyledRun::new("a", Style::Bold),
                StyledRun::new("b", Style::Code),
            ]
        );
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_runs(""), Vec::new());
    }
}
