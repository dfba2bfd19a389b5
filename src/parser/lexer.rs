//! Lexer: `nom` recognizers for line classification and inline delimiters.
//!
//! Every recognizer takes a single already-stripped line (no newlines) and
//! either consumes it or fails, letting the dispatcher fall through to the
//! next pattern. Inline recognizers consume from the current scan position
//! and fail when no closing delimiter exists, which the tokenizer turns
//! into literal text.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, satisfy},
    combinator::{eof, not, peek, rest, value, verify},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

/// An ATX heading: one to three `#` characters, a space, then the text.
/// Four or more hashes are not a heading and fall through to paragraph.
pub fn heading(input: &str) -> IResult<&str, (u8, &str)> {
    let (input, hashes) = verify(take_while1(|c| c == '#'), |s: &str| s.len() <= 3)(input)?;
    let (input, text) = preceded(char(' '), rest)(input)?;
    Ok((input, (hashes.len() as u8, text)))
}

/// A horizontal rule: three or more characters drawn from `-`, `_`, `*`
/// (mixing allowed) filling the whole line.
pub fn thematic_break(input: &str) -> IResult<&str, ()> {
    value(
        (),
        terminated(
            verify(take_while1(|c| matches!(c, '-' | '_' | '*')), |s: &str| {
                s.len() >= 3
            }),
            eof,
        ),
    )(input)
}

/// A block quote line: `> ` followed by the quoted text.
pub fn block_quote(input: &str) -> IResult<&str, &str> {
    preceded(tag("> "), rest)(input)
}

/// A bullet list item: `- ` or `* ` followed by the item text.
pub fn bullet_item(input: &str) -> IResult<&str, &str> {
    preceded(alt((tag("- "), tag("* "))), rest)(input)
}

/// A numbered list item: digits, a period, one whitespace character, then
/// the item text. Returns the numeral (without the period) and the text.
pub fn numbered_item(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, digits) = take_while1(|c: char| c.is_ascii_digit())(input)?;
    let (input, _) = char('.')(input)?;
    let (input, _) = satisfy(char::is_whitespace)(input)?;
    let (input, text) = rest(input)?;
    Ok((input, (digits, text)))
}

/// Bold span: `**...**`. Fails when no closing `**` follows.
pub fn strong(input: &str) -> IResult<&str, &str> {
    delimited(tag("**"), take_until("**"), tag("**"))(input)
}

/// Italic span: `*...*` where the opener is a lone asterisk.
/// Fails when no closing `*` follows.
pub fn emphasis(input: &str) -> IResult<&str, &str> {
    delimited(
        pair(char('*'), peek(not(char('*')))),
        take_until("*"),
        char('*'),
    )(input)
}

/// Code span: `` `...` ``. Fails when no closing backtick follows.
pub fn inline_code(input: &str) -> IResult<&str, &str> {
    delimited(char('`'), take_until("`"), char('`'))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading("# Hello"), Ok(("", (1, "Hello"))));
        assert_eq!(heading("## Two words"), Ok(("", (2, "Two words"))));
        assert_eq!(heading("### Deep"), Ok(("", (3, "Deep"))));
    }

    #[test]
    fn test_heading_rejects_four_hashes() {
        assert!(heading("#### Too deep").is_err());
    }

    #[test]
    fn test_heading_requires_space() {
        assert!(heading("#Hello").is_err());
    }

    #[test]
    fn test_thematic_break() {
        assert!(thematic_break("---").is_ok());
        assert!(thematic_break("_____").is_ok());
        assert!(thematic_break("***").is_ok());
        // The character class may mix, as the source pattern allowed.
        assert!(thematic_break("-_*").is_ok());
        assert!(thematic_break("--").is_err());
        assert!(thematic_break("--- rest").is_err());
    }

    #[test]
    fn test_block_quote() {
        assert_eq!(block_quote("> quoted"), Ok(("", "quoted")));
        assert!(block_quote(">no space").is_err());
    }

    #[test]
    fn test_bullet_item() {
        assert_eq!(bullet_item("- item"), Ok(("", "item")));
        assert_eq!(bullet_item("* item"), Ok(("", "item")));
        assert!(bullet_item("-item").is_err());
    }

    #[test]
    fn test_numbered_item() {
        assert_eq!(numbered_item("1. first"), Ok(("", ("1", "first"))));
        assert_eq!(numbered_item("42. answer"), Ok(("", ("42", "answer"))));
        assert!(numbered_item("1) paren").is_err());
        assert!(numbered_item("1.").is_err());
    }

    #[test]
    fn test_strong() {
        assert_eq!(strong("**bold** rest"), Ok((" rest", "bold")));
        assert!(strong("**unclosed").is_err());
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(emphasis("*italic* rest"), Ok((" rest", "italic")));
        // A double asterisk is never an italic opener.
        assert!(emphasis("**bold**").is_err());
        assert!(emphasis("*unclosed").is_err());
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(inline_code("`code` rest"), Ok((" rest", "code")));
        assert!(inline_code("`unclosed").is_err());
    }
}
