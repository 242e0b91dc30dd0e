//! `_redirects` Validator CLI
//!
//! A command-line tool for validating Netlify-style `_redirects` files.

use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, ParseReport};
use redirects_core::parse::{LineScanner, parse_bufread, parse_rule};

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let exit_code = run(args);
    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Parses the whole input, stopping at the first bad line.
fn parse_strict<R: BufRead>(reader: R) -> ParseReport {
    let result = parse_bufread(reader);
    ParseReport {
        rules: result.rules,
        errors: result.error.into_iter().collect(),
    }
}

/// Parses the whole input, recording bad lines and moving on.
///
/// Read failures still end the run since nothing after them can be trusted.
fn parse_keep_going<R: BufRead>(reader: R) -> ParseReport {
    let mut report = ParseReport::new();

    for item in LineScanner::new(reader) {
        match item.and_then(|line| parse_rule(&line)) {
            Ok(rule) => report.rules.push(rule),
            Err(error) => {
                debug!("Skipping line {}: {}", error.line(), error);
                report.errors.push(error);
            }
        }
    }

    report
}

/// Run the validator with the given arguments.
fn run(args: Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Reading rules from {}", config.input.display_name());

    let reader = match config.input.open() {
        Ok(reader) => reader,
        Err(e) => {
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let report = if config.keep_going {
        parse_keep_going(reader)
    } else {
        parse_strict(reader)
    };

    info!(
        "Parsed {} rule(s) with {} error(s)",
        report.rules.len(),
        report.errors.len()
    );

    // Output results
    let written = if config.json_output {
        report.write_json(&mut stdout)
    } else {
        report.write_human(&mut stdout, config.list_rules, use_colors)
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    // Determine exit code
    config.exit_code_for_results(report.has_errors())
}
