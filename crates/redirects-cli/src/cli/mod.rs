//! CLI module for the `_redirects` validator.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// `_redirects` file validator - parses Netlify-style redirect rules.
///
/// Reports the first malformed line (or every malformed line with
/// `--keep-going`). Supports both human-readable and JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "redirects-validator")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the `_redirects` file, or `-` to read standard input.
    #[arg(env = "REDIRECTS_FILE", default_value = "_redirects")]
    pub file: PathBuf,

    /// Keep parsing after a bad line and report every error.
    #[arg(long, short = 'k', env = "REDIRECTS_KEEP_GOING")]
    pub keep_going: bool,

    /// List the parsed rules (human output only; JSON always includes them).
    #[arg(long, short = 'l')]
    pub list: bool,

    /// Output results as JSON instead of human-readable format.
    #[arg(long, short = 'j', env = "REDIRECTS_JSON")]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns true if the input should be read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}
