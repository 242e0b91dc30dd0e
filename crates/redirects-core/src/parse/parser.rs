//! Line and file-level parsers for `_redirects` files.
//!
//! This module combines the scanner, the field tokenizer and the status and
//! parameter decoders to parse complete lines and entire files.

use super::error::{ParseError, ParseResult};
use super::lexer::{Field, is_blank_line, is_comment_line, tokenize_fields};
use super::params::parse_params;
use super::rule::Rule;
use super::scanner::{LineScanner, SourceLine};
use super::span::Span;
use super::status::parse_status;
use log::{debug, trace};
use std::io::{BufRead, BufReader, Cursor, Read};

/// Returns the span of a field on a scanned line.
fn field_span(line: &SourceLine, field: &Field<'_>) -> Span {
    line.span().advance(&line.text[..field.offset], field.text.len())
}

/// Parses a significant line into a rule.
pub fn parse_rule(line: &SourceLine) -> Result<Rule, ParseError> {
    let fields = tokenize_fields(&line.text);

    let (from, to) = match fields.as_slice() {
        [from, to, ..] => (from, to),
        _ => return Err(ParseError::malformed_rule(line.text.as_str(), line.span())),
    };

    let mut rule = Rule::new(from.text, to.text).with_span(line.span());

    if let Some(status_field) = fields.get(2) {
        let (status, force) = parse_status(status_field.text)
            .map_err(|e| ParseError::invalid_status(e, field_span(line, status_field)))?;
        rule = rule.with_status(status, force);
    }

    if fields.len() > 3 {
        rule = rule.with_params(parse_params(fields[3..].iter().map(|f| f.text)));
    }

    Ok(rule)
}

/// Parses one line of text on its own.
///
/// Returns `Ok(None)` for blank and comment lines. Useful for callers that
/// want to skip bad lines instead of stopping at the first one.
pub fn parse_line(text: &str, line_number: usize) -> Result<Option<Rule>, ParseError> {
    if is_blank_line(text) || is_comment_line(text) {
        return Ok(None);
    }

    let indent = text.len() - text.trim_start().len();
    let line = SourceLine {
        text: text.trim().to_string(),
        line: line_number,
        offset: 0,
        indent,
        column: text[..indent].chars().count() + 1,
    };
    parse_rule(&line).map(Some)
}

/// Parses a `_redirects` file from a buffered reader.
///
/// Stops at the first error; the rules parsed before it are kept in the result.
pub fn parse_bufread<R: BufRead>(reader: R) -> ParseResult {
    let mut rules = Vec::new();
    let mut scanner = LineScanner::new(reader);

    for item in scanner.by_ref() {
        let parsed = item.and_then(|line| parse_rule(&line));
        match parsed {
            Ok(rule) => {
                trace!("Line {}: parsed {}", rule.span.line, rule);
                rules.push(rule);
            }
            Err(error) => {
                debug!("Parse error, stopping after {} rule(s): {}", rules.len(), error);
                return ParseResult::with_error(rules, error);
            }
        }
    }

    debug!(
        "Parsing complete: {} lines, {} rules",
        scanner.lines_read(),
        rules.len()
    );
    ParseResult::ok(rules)
}

/// Parses a `_redirects` file from any reader.
pub fn parse_reader<R: Read>(reader: R) -> ParseResult {
    parse_bufread(BufReader::new(reader))
}

/// Parses a `_redirects` file from a string.
pub fn parse_str(input: &str) -> ParseResult {
    debug!("Parsing _redirects input ({} bytes)", input.len());
    parse_bufread(Cursor::new(input))
}

/// Parses trusted rule text, panicking on any error.
///
/// Meant for compiled-in defaults and tests. Never use it on user input.
///
/// # Panics
///
/// Panics if the input does not parse.
pub fn must_parse(input: &str) -> Vec<Rule> {
    parse_str(input).must()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::params::ParamValue;

    fn text(value: &str) -> ParamValue {
        ParamValue::Text(value.to_string())
    }

    #[test]
    fn parse_empty_input() {
        let result = parse_str("");
        assert!(result.is_ok());
        assert!(result.rules.is_empty());
    }

    #[test]
    fn two_fields_use_defaults() {
        let rules = must_parse("/home /\n");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].from, "/home");
        assert_eq!(rules[0].to, "/");
        assert_eq!(rules[0].status, 301);
        assert!(!rules[0].force);
        assert!(rules[0].params.is_none());
    }

    #[test]
    fn status_and_force() {
        let rules = must_parse("/a /b 200!\n/c /d 302\n");
        assert_eq!((rules[0].status, rules[0].force), (200, true));
        assert!(rules[0].params.is_none());
        assert_eq!((rules[1].status, rules[1].force), (302, false));
    }

    #[test]
    fn params_after_status() {
        let rules = must_parse("/ /something 302 foo=bar bar=baz Country\n");
        let params = rules[0].params.as_ref().unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("foo"), Some(&text("bar")));
        assert_eq!(params.get("bar"), Some(&text("baz")));
        assert_eq!(params.get("Country"), Some(&ParamValue::Flag));
    }

    #[test]
    fn end_to_end_example() {
        let input = "/home /\n/api/* https://api.example.com/:splat 200\n/ /something 302 foo=bar bar=baz\n";
        let rules = must_parse(input);
        assert_eq!(rules.len(), 3);

        assert_eq!(rules[0], Rule::new("/home", "/").with_span(rules[0].span));
        assert_eq!(
            rules[1],
            Rule::new("/api/*", "https://api.example.com/:splat")
                .with_status(200, false)
                .with_span(rules[1].span)
        );
        assert_eq!(rules[2].from, "/");
        assert_eq!(rules[2].to, "/something");
        assert_eq!(rules[2].status, 302);
        assert!(!rules[2].force);
        assert_eq!(rules[2].param("foo"), Some(&text("bar")));
        assert_eq!(rules[2].param("bar"), Some(&text("baz")));
        assert_eq!(rules[2].params.as_ref().map(|p| p.len()), Some(2));
    }

    const DOCUMENTED_EXAMPLE: &str = "
\t\t# Implicit 301 redirects
\t\t/home              /
\t\t/blog/my-post.php  /blog/my-post
\t\t/news              /blog
\t\t/google            https://www.google.com

\t\t# Redirect with a 301
\t\t/home         /              301

\t\t# Redirect with a 302
\t\t/my-redirect  /              302

\t\t# Rewrite a path
\t\t/pass-through /index.html    200

\t\t# Show a custom 404 for this path
\t\t/ecommerce    /store-closed  404

\t\t# Single page app rewrite
\t\t/*    /index.html   200

\t\t# Proxying
\t\t/api/*  https://api.example.com/:splat  200

\t\t# Forcing
\t\t/app/*  /app/index.html  200!

\t\t# Params
\t\t/\t/something\t302\tfoo=bar
\t\t/\t/something\t302\tfoo=bar bar=baz
  ";

    #[test]
    fn documented_example_serializes_to_json() {
        let rules = must_parse(DOCUMENTED_EXAMPLE);

        fn rule(from: &str, to: &str, status: i64) -> serde_json::Value {
            serde_json::json!({
                "From": from,
                "To": to,
                "Status": status,
                "Force": false,
                "Params": null
            })
        }

        let expected = serde_json::json!([
            rule("/home", "/", 301),
            rule("/blog/my-post.php", "/blog/my-post", 301),
            rule("/news", "/blog", 301),
            rule("/google", "https://www.google.com", 301),
            rule("/home", "/", 301),
            rule("/my-redirect", "/", 302),
            rule("/pass-through", "/index.html", 200),
            rule("/ecommerce", "/store-closed", 404),
            rule("/*", "/index.html", 200),
            rule("/api/*", "https://api.example.com/:splat", 200),
            {
                "From": "/app/*",
                "To": "/app/index.html",
                "Status": 200,
                "Force": true,
                "Params": null
            },
            {
                "From": "/",
                "To": "/something",
                "Status": 302,
                "Force": false,
                "Params": {"foo": "bar"}
            },
            {
                "From": "/",
                "To": "/something",
                "Status": 302,
                "Force": false,
                "Params": {"bar": "baz", "foo": "bar"}
            }
        ]);

        assert_eq!(serde_json::to_value(&rules).unwrap(), expected);

        // Keys come out sorted regardless of source order
        let json = serde_json::to_string(&rules[12].params).unwrap();
        assert_eq!(json, r#"{"bar":"baz","foo":"bar"}"#);
    }

    #[test]
    fn single_field_is_malformed() {
        let result = parse_str("/onlyone");
        let error = result.error.unwrap();
        assert!(matches!(
            &error,
            ParseError::MalformedRule { line: 1, raw, .. } if raw == "/onlyone"
        ));
    }

    #[test]
    fn bad_status_is_invalid() {
        let result = parse_str("/a /b notanumber");
        let error = result.error.unwrap();
        assert!(matches!(
            &error,
            ParseError::InvalidStatus { line: 1, field, .. } if field == "notanumber"
        ));
        let span = error.span().unwrap();
        assert_eq!(span.column, 7);
        assert_eq!(span.length, 10);
    }

    #[test]
    fn error_columns_count_characters() {
        let error = parse_str("/é /b x").error.unwrap();
        assert!(matches!(error, ParseError::InvalidStatus { .. }));
        let span = error.span().unwrap();
        assert_eq!(span.column, 7);
        assert_eq!(span.offset, 7);
        assert_eq!(error.column(), 7);

        let error = parse_line("\u{3000}/ü /b ✗", 5).unwrap_err();
        assert_eq!(error.column(), 8);
    }

    #[test]
    fn error_keeps_rules_parsed_before_it() {
        let input = "/a /b\n/c /d 302\n/broken\n/e /f\n";
        let result = parse_str(input);
        assert_eq!(result.rules.len(), 2);
        assert_eq!(result.rules[1].from, "/c");
        assert_eq!(result.error.as_ref().map(ParseError::line), Some(3));
    }

    #[test]
    fn into_result_drops_partial_rules() {
        let result = parse_str("/a /b\n/broken\n").into_result();
        assert!(matches!(result, Err(ParseError::MalformedRule { line: 2, .. })));
    }

    #[test]
    fn comments_and_blank_lines_anywhere() {
        let input = "\n# top\n/a /b\n\n   # middle\n\t\n/c /d\n# bottom\n\n";
        let rules = must_parse(input);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].span.line, 3);
        assert_eq!(rules[1].span.line, 7);
    }

    #[test]
    fn preserves_rule_order() {
        let input = "/3 /x\n/1 /x\n/2 /x\n";
        let froms: Vec<_> = must_parse(input).into_iter().map(|r| r.from).collect();
        assert_eq!(froms, vec!["/3", "/1", "/2"]);
    }

    #[test]
    fn parsing_twice_is_equal() {
        let input = "/a /b 200!\n/c https://example.com/:splat 200 x=y\n";
        assert_eq!(must_parse(input), must_parse(input));
    }

    #[test]
    fn reader_and_string_agree() {
        let input = "/a /b 302\n/c /d\n";
        let from_reader = parse_reader(input.as_bytes()).into_result().unwrap();
        assert_eq!(from_reader, must_parse(input));
    }

    #[test]
    fn rule_span_points_at_trimmed_text() {
        let rules = must_parse("/a /b\n   /c /d  \n");
        let span = rules[1].span;
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 4);
        assert_eq!(span.offset, 9);
        assert_eq!(span.length, 5);
    }

    #[test]
    fn parse_line_skips_non_rules() {
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("  # comment", 2).unwrap(), None);
    }

    #[test]
    fn parse_line_reports_given_line_number() {
        let rule = parse_line("  /a /b 404", 9).unwrap().unwrap();
        assert_eq!(rule.status, 404);
        assert_eq!(rule.span.line, 9);
        assert_eq!(rule.span.column, 3);

        let error = parse_line("/a /b x!", 12).unwrap_err();
        assert_eq!(error.line(), 12);
    }

    #[test]
    #[should_panic(expected = "invalid _redirects rules")]
    fn must_parse_panics_on_bad_input() {
        must_parse("/onlyone\n");
    }
}
