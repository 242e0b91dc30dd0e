//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into a validated configuration and
//! opens the input the rules are read from.

use crate::cli::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rules file does not exist.
    #[error("_redirects file not found: '{0}'")]
    NotFound(PathBuf),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Failed to open the rules file.
    #[error("failed to open '{path}': {source}")]
    Open {
        /// The file that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every rule parsed successfully.
    Success = 0,
    /// Application startup failed (wrong configuration or unreadable input).
    StartupFailure = 1,
    /// The file contains at least one bad rule.
    ValidationFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Where the rules are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Returns a name for the input suitable for messages.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Opens the input for buffered reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>, ConfigError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| ConfigError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Validated and processed configuration for running the validator.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Where to read the rules from.
    pub input: InputSource,
    /// Whether to keep going after the first bad line.
    pub keep_going: bool,
    /// Whether to list the parsed rules.
    pub list_rules: bool,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let input = if args.reads_stdin() {
            InputSource::Stdin
        } else {
            if !args.file.exists() {
                return Err(ConfigError::NotFound(args.file.clone()));
            }
            if args.file.is_dir() {
                return Err(ConfigError::Invalid(format!(
                    "'{}' is a directory, expected a _redirects file",
                    args.file.display()
                )));
            }
            InputSource::File(args.file.clone())
        };

        Ok(Self {
            input,
            keep_going: args.keep_going,
            list_rules: args.list,
            json_output: args.json,
        })
    }

    /// Determines the exit code based on the number of parse errors.
    pub fn exit_code_for_results(&self, has_errors: bool) -> ExitCode {
        if has_errors {
            ExitCode::ValidationFailed
        } else {
            ExitCode::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    fn create_test_site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_redirects"), "/home /\n").unwrap();
        dir
    }

    fn args_for(path: &std::path::Path) -> Args {
        Args::parse_from(["redirects-validator", path.to_str().unwrap()])
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::StartupFailure), 1);
        assert_eq!(i32::from(ExitCode::ValidationFailed), 3);
    }

    #[test]
    fn test_validated_config_for_file() {
        let dir = create_test_site();
        let path = dir.path().join("_redirects");
        let config = ValidatedConfig::from_args(&args_for(&path)).unwrap();
        assert_eq!(config.input, InputSource::File(path));
        assert!(!config.keep_going);
        assert!(!config.json_output);
    }

    #[test]
    fn test_validated_config_for_stdin() {
        let args = Args::parse_from(["redirects-validator", "-", "--json", "--keep-going"]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.input.display_name(), "<stdin>");
        assert!(config.json_output);
        assert!(config.keep_going);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ValidatedConfig::from_args(&args_for(&dir.path().join("_redirects")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = ValidatedConfig::from_args(&args_for(dir.path()));
        let error = result.unwrap_err();
        assert!(error.to_string().contains("is a directory"));
    }

    #[test]
    fn test_open_file_input() {
        let dir = create_test_site();
        let source = InputSource::File(dir.path().join("_redirects"));
        let mut content = String::new();
        source.open().unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "/home /\n");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let source = InputSource::File(dir.path().join("gone"));
        assert!(matches!(source.open(), Err(ConfigError::Open { .. })));
    }

    #[test]
    fn test_exit_code_for_results() {
        let dir = create_test_site();
        let config = ValidatedConfig::from_args(&args_for(&dir.path().join("_redirects"))).unwrap();
        assert_eq!(config.exit_code_for_results(false), ExitCode::Success);
        assert_eq!(
            config.exit_code_for_results(true),
            ExitCode::ValidationFailed
        );
    }
}
