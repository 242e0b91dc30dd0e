//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for parse results.

use colored::Colorize;
use redirects_core::parse::{ParseError, Rule, RuleKind};
use serde::Serialize;
use std::io::Write;

/// Everything learned from one run over a `_redirects` file.
#[derive(Debug, Default)]
pub struct ParseReport {
    /// Rules that parsed, in file order.
    pub rules: Vec<Rule>,
    /// Errors, in file order.
    pub errors: Vec<ParseError>,
}

impl ParseReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Writes the report in human-readable format.
    pub fn write_human<W: Write>(
        &self,
        writer: &mut W,
        list_rules: bool,
        use_colors: bool,
    ) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors);

        if list_rules {
            output.write_rules(&self.rules)?;
        }
        for error in &self.errors {
            output.write_issue(error)?;
        }
        output.write_summary(self.rules.len(), self.errors.len())
    }

    /// Writes the report in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        JsonOutput::from(self).write(writer)
    }
}

/// JSON output format.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Parsed rules, as `{"From", "To", "Status", "Force", "Params"}` objects.
    pub rules: &'a [Rule],
    /// Parse errors.
    pub errors: Vec<JsonIssue>,
}

impl<'a> From<&'a ParseReport> for JsonOutput<'a> {
    fn from(report: &'a ParseReport) -> Self {
        Self {
            rules: &report.rules,
            errors: report.errors.iter().map(JsonIssue::from).collect(),
        }
    }
}

impl JsonOutput<'_> {
    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// A single issue in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonIssue {
    /// Line number where the issue occurred.
    pub line: usize,
    /// Column number where the issue occurred.
    pub column: usize,
    /// Human-readable message.
    pub message: String,
}

impl From<&ParseError> for JsonIssue {
    fn from(error: &ParseError) -> Self {
        Self {
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes one line per rule.
    pub fn write_rules(&mut self, rules: &[Rule]) -> std::io::Result<()> {
        for rule in rules {
            let label = format!("{:<11}", rule.kind().to_string());
            let kind = if self.use_colors {
                match rule.kind() {
                    RuleKind::Redirect => label.as_str().cyan(),
                    RuleKind::Rewrite => label.as_str().green(),
                    RuleKind::Proxy => label.as_str().magenta(),
                    RuleKind::Passthrough => label.as_str().yellow(),
                }
            } else {
                label.as_str().normal()
            };
            writeln!(self.writer, "  {:>4}  {} {}", rule.span.line, kind, rule)?;
        }
        Ok(())
    }

    /// Writes a single issue.
    pub fn write_issue(&mut self, error: &ParseError) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "  {} {}", "[ERROR]".red().bold(), error)?;
        } else {
            writeln!(self.writer, "  [ERROR] {}", error)?;
        }
        Ok(())
    }

    /// Writes a summary of the run.
    pub fn write_summary(&mut self, total_rules: usize, total_errors: usize) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if total_errors == 0 {
            let message = format!("✓ _redirects file is valid ({} rule(s))", total_rules);
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!("✗ Found {} error(s)", total_errors);
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}
