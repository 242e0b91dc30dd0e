//! The rule data model.
//!
//! A [`Rule`] is one parsed redirect, rewrite, or proxy directive.

use super::params::{ParamValue, Params};
use super::span::Span;
use super::status::DEFAULT_STATUS;
use serde::Serialize;
use std::fmt::{self, Display};
use url::Url;

/// How a consumer is expected to treat a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Serve the destination without changing the visible path (status 200).
    Rewrite,
    /// Tell the client to re-request the destination (3xx).
    Redirect,
    /// Fetch and relay an absolute URL.
    Proxy,
    /// Respond with the rule's status as-is (e.g. a custom 404).
    Passthrough,
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleKind::Rewrite => "rewrite",
            RuleKind::Redirect => "redirect",
            RuleKind::Proxy => "proxy",
            RuleKind::Passthrough => "passthrough",
        })
    }
}

/// A single redirection or rewrite rule.
///
/// Serializes as `{"From", "To", "Status", "Force", "Params"}`, with
/// `Params` set to `null` when the line had no parameter fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    /// The path which is matched to perform the rule.
    pub from: String,
    /// The destination, either a path or an absolute URL to proxy to.
    pub to: String,
    /// 200 is a rewrite, 3xx a redirect, anything else is passed through.
    pub status: i64,
    /// Apply the rule even when a response or static file exists.
    pub force: bool,
    /// Optional key/value parameters; `None` when the line had none.
    pub params: Option<Params>,
    /// Location of the rule in the source file.
    #[serde(skip)]
    pub span: Span,
}

impl Rule {
    /// Creates a rule with the default status and no parameters.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            status: DEFAULT_STATUS,
            force: false,
            params: None,
            span: Span::default(),
        }
    }

    /// Sets the status and force flag.
    pub fn with_status(mut self, status: i64, force: bool) -> Self {
        self.status = status;
        self.force = force;
        self
    }

    /// Sets the parameters.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Sets the source location.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns true if the parameter is present. Always false without parameters.
    pub fn has_param(&self, key: &str) -> bool {
        self.params.as_ref().is_some_and(|p| p.has(key))
    }

    /// Returns the parameter value, or `None` if absent.
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.as_ref().and_then(|p| p.get(key))
    }

    /// Returns true if the rule is a rewrite (status 200).
    pub fn is_rewrite(&self) -> bool {
        self.status == 200
    }

    /// Returns true if the status is in the 3xx range.
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// Returns true if the destination names a host.
    ///
    /// Protocol-relative destinations such as `//cdn.example.com/x` count.
    pub fn is_proxy(&self) -> bool {
        let parsed = if self.to.starts_with("//") {
            Url::parse(&format!("http:{}", self.to))
        } else {
            Url::parse(&self.to)
        };
        parsed.is_ok_and(|url| url.host_str().is_some_and(|h| !h.is_empty()))
    }

    /// Classifies the rule. A proxy destination takes precedence over the status.
    pub fn kind(&self) -> RuleKind {
        if self.is_proxy() {
            RuleKind::Proxy
        } else if self.is_rewrite() {
            RuleKind::Rewrite
        } else if self.is_redirect() {
            RuleKind::Redirect
        } else {
            RuleKind::Passthrough
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({}", self.from, self.to, self.status)?;
        if self.force {
            f.write_str(", forced")?;
        }
        f.write_str(")")?;
        if let Some(params) = &self.params {
            write!(f, " [{}]", params)?;
        }
        Ok(())
    }
}
