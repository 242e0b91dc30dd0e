//! Lexer and token parsers for `_redirects` files.
//!
//! This module contains nom-based parsers for comment detection and for
//! splitting a rule line into whitespace-separated fields.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::rest,
};

/// Characters that can appear inside a field.
fn is_field_char(c: char) -> bool {
    !c.is_whitespace()
}

/// Parses a complete comment line (optional whitespace + # + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (take_while(char::is_whitespace), char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Returns true if the line is a comment (first non-whitespace char is `#`).
pub fn is_comment_line(input: &str) -> bool {
    parse_comment_line(input).is_ok()
}

/// A single whitespace-delimited field of a rule line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// The field text.
    pub text: &'a str,
    /// Byte offset of the field start within the line.
    pub offset: usize,
}

/// Parses one field, skipping any whitespace before it.
///
/// Returns the field text and the number of whitespace bytes skipped.
fn parse_field(input: &str) -> IResult<&str, (usize, &str)> {
    let (after_ws, ws) = take_while(char::is_whitespace)(input)?;
    let (rest, text) = take_while1(is_field_char)(after_ws)?;
    Ok((rest, (ws.len(), text)))
}

/// Splits a line on runs of whitespace into its fields.
///
/// Whitespace is anything `char::is_whitespace` accepts, so tabs and
/// Unicode spaces separate fields just like ASCII spaces.
pub fn tokenize_fields(input: &str) -> Vec<Field<'_>> {
    let mut fields = Vec::new();
    let mut current = input;
    let mut offset = 0;

    while let Ok((rest, (skipped, text))) = parse_field(current) {
        offset += skipped;
        fields.push(Field { text, offset });
        offset += text.len();
        current = rest;
    }

    fields
}
