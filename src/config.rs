//! Run configuration, built from the command line.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::errors::{FilterError, Result};

/// The three parameters of a filter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Column whose cells must hold a value.
    pub column: String,
}

impl FilterConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        column: impl Into<String>,
    ) -> Self {
        FilterConfig {
            input_path: input_path.into(),
            output_path: output_path.into(),
            column: column.into(),
        }
    }

    /// Build and validate a config from parsed arguments.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = FilterConfig::new(cli.input_path, cli.output_path, cli.column);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.column.is_empty() {
            return Err(FilterError::Config("column name must not be empty".into()));
        }
        if self.input_path.as_os_str().is_empty() {
            return Err(FilterError::Config("input path must not be empty".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(FilterError::Config("output path must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn from_cli_copies_arguments() {
        let cli = Cli::parse_from(["rowprune", "parts.csv", "valid.csv", "subject_id"]);
        let config = FilterConfig::from_cli(cli).unwrap();
        assert_eq!(config, FilterConfig::new("parts.csv", "valid.csv", "subject_id"));
    }

    #[test]
    fn empty_column_is_rejected() {
        let cli = Cli::parse_from(["rowprune", "parts.csv", "valid.csv", ""]);
        match FilterConfig::from_cli(cli) {
            Err(FilterError::Config(msg)) => assert!(msg.contains("column")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn empty_paths_are_rejected() {
        assert!(FilterConfig::new("", "out.csv", "c").validate().is_err());
        assert!(FilterConfig::new("in.csv", "", "c").validate().is_err());
        assert!(FilterConfig::new("in.csv", "out.csv", "c").validate().is_ok());
    }
}
