//! Error types for `_redirects` file parsing.
//!
//! This module defines error types that capture parse failures
//! along with their source locations.

use super::rule::Rule;
use super::span::Span;
use std::num::ParseIntError;
use thiserror::Error;

/// A status field that is not a valid integer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status {field:?}: {source}")]
pub struct StatusError {
    field: String,
    #[source]
    source: ParseIntError,
}

impl StatusError {
    /// Creates a status error for the given raw field text.
    pub fn new(field: impl Into<String>, source: ParseIntError) -> Self {
        Self {
            field: field.into(),
            source,
        }
    }

    /// Returns the raw status field, including any `!` markers.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the underlying integer conversion failure.
    pub fn int_error(&self) -> &ParseIntError {
        &self.source
    }
}

/// An error that stopped a parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input stream could not be read.
    #[error("line {line}: failed to read input: {source}")]
    Read {
        /// The line number being read (1-based).
        line: usize,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A rule line has fewer than two fields.
    #[error("line {line}: missing destination path: {raw:?}")]
    MalformedRule {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// The trimmed line text.
        raw: String,
        /// Location of the line content in the source.
        span: Span,
    },

    /// The status field is not an integer.
    #[error("line {line}: parsing status {field:?}: {}", .source.int_error())]
    InvalidStatus {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// The raw status field text.
        field: String,
        /// Location of the status field in the source.
        span: Span,
        /// Why the field was rejected.
        #[source]
        source: StatusError,
    },
}

impl ParseError {
    /// Creates a read error.
    pub fn read(line: usize, source: std::io::Error) -> Self {
        Self::Read { line, source }
    }

    /// Creates a malformed rule error.
    pub fn malformed_rule(raw: impl Into<String>, span: Span) -> Self {
        Self::MalformedRule {
            line: span.line,
            raw: raw.into(),
            span,
        }
    }

    /// Creates an invalid status error.
    pub fn invalid_status(source: StatusError, span: Span) -> Self {
        Self::InvalidStatus {
            line: span.line,
            field: source.field().to_string(),
            span,
            source,
        }
    }

    /// Returns the span associated with this error, if it has one.
    pub fn span(&self) -> Option<&Span> {
        match self {
            ParseError::Read { .. } => None,
            ParseError::MalformedRule { span, .. } => Some(span),
            ParseError::InvalidStatus { span, .. } => Some(span),
        }
    }

    /// Returns the line number where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Read { line, .. } => *line,
            ParseError::MalformedRule { line, .. } => *line,
            ParseError::InvalidStatus { line, .. } => *line,
        }
    }

    /// Returns the column where this error occurred (1 when unknown).
    pub fn column(&self) -> usize {
        self.span().map_or(1, |span| span.column)
    }
}

/// The result of parsing a `_redirects` file.
///
/// Parsing stops at the first error. The rules from the lines before the
/// failing one are kept next to the error.
#[derive(Debug)]
pub struct ParseResult {
    /// The rules parsed so far, in file order.
    pub rules: Vec<Rule>,
    /// The error that stopped parsing, if any.
    pub error: Option<ParseError>,
}

impl ParseResult {
    /// Creates a successful parse result.
    pub fn ok(rules: Vec<Rule>) -> Self {
        Self { rules, error: None }
    }

    /// Creates a failed parse result that keeps the rules parsed before the error.
    pub fn with_error(rules: Vec<Rule>, error: ParseError) -> Self {
        Self {
            rules,
            error: Some(error),
        }
    }

    /// Returns true if parsing succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true if parsing stopped on an error.
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }

    /// Converts into a `Result`, dropping any partial rules on error.
    pub fn into_result(self) -> Result<Vec<Rule>, ParseError> {
        match self.error {
            None => Ok(self.rules),
            Some(error) => Err(error),
        }
    }

    /// Returns the rules, panicking if parsing failed.
    ///
    /// Only for trusted, compiled-in rule text.
    ///
    /// # Panics
    ///
    /// Panics with the parse error message if parsing failed.
    pub fn must(self) -> Vec<Rule> {
        match self.into_result() {
            Ok(rules) => rules,
            Err(error) => panic!("invalid _redirects rules: {}", error),
        }
    }
}
