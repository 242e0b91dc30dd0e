//! Parser module for `_redirects` files.
//!
//! This module turns Netlify-style `_redirects` text into an ordered list of
//! [`Rule`]s. Each line has the shape:
//!
//! ```text
//! <from> <to> [<status>[!]] [<key>[=<value>] ...]
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.
//!
//! # Example
//!
//! ```rust
//! use redirects_core::parse::parse_str;
//!
//! let input = r#"
//! # Implicit 301 redirect
//! /home /
//! /api/* https://api.example.com/:splat 200
//! "#;
//!
//! let result = parse_str(input);
//! if result.is_ok() {
//!     for rule in &result.rules {
//!         println!("{}", rule);
//!     }
//! }
//! ```

mod error;
mod lexer;
mod params;
mod parser;
mod rule;
mod scanner;
pub mod span;
mod status;

// Re-export public types
pub use error::{ParseError, ParseResult, StatusError};
pub use params::{ParamValue, Params, parse_param, parse_params};
pub use parser::{must_parse, parse_bufread, parse_line, parse_reader, parse_rule, parse_str};
pub use rule::{Rule, RuleKind};
pub use scanner::{LineScanner, SourceLine};
pub use span::Span;
pub use status::{DEFAULT_STATUS, FORCE_MARKER, parse_status};

// Re-export lexer utilities that may be useful for custom parsing
pub use lexer::{Field, is_blank_line, is_comment_line, tokenize_fields};
