//! Redirects Core
//!
//! A library for parsing Netlify-style `_redirects` files.
//!
//! # Features
//!
//! - **Parser**: Turn `_redirects` text into an ordered list of typed rules
//! - **Streaming**: Read rules lazily from any `Read`/`BufRead` source
//! - **Diagnostics**: Every rule and error carries its line and column
//! - **Fail-fast**: Parsing stops at the first bad line
//!
//! Matching request paths against the rules is left to the consumer; rule
//! order is significant for first-match-wins routing.
//!
//! # Quick Start
//!
//! ```rust
//! use redirects_core::parse::{ParamValue, parse_str};
//!
//! let input = r#"
//! # Redirects
//! /home              /
//! /api/*             https://api.example.com/:splat  200
//! /app/*             /app/index.html                 200!
//! /                  /something                      302  foo=bar
//! "#;
//!
//! let result = parse_str(input);
//! match result.into_result() {
//!     Ok(rules) => {
//!         assert_eq!(rules.len(), 4);
//!         assert!(rules[1].is_proxy());
//!         assert!(rules[2].force);
//!         assert_eq!(rules[3].param("foo"), Some(&ParamValue::Text("bar".into())));
//!     }
//!     Err(error) => eprintln!("Parse error: {}", error),
//! }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Parser for `_redirects` files

#[cfg(feature = "generate")]
pub mod generate;
pub mod parse;

// Re-export commonly used types at the crate root
pub use parse::{
    ParamValue, Params, ParseError, ParseResult, Rule, RuleKind, must_parse, parse_reader,
    parse_str,
};
