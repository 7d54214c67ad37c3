//! CLI definition for the agent configuration validator
//!
//! The validator takes no arguments; clap only supplies `--help` and
//! `--version`.

use clap::Parser;
use std::io::{self, Write};

use super::output::ConsoleReporter;
use super::ExitCode;
use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::scan::scan_directory;

/// Agent Configuration Validator
///
/// Checks every agent configuration (`*.yml`, `*.yaml`) and the optional
/// `agents.json` index in the directory holding this executable.
#[derive(Parser, Debug)]
#[command(name = "validate-agents")]
#[command(about = "Validate agent configuration files next to this executable", long_about = None)]
#[command(version)]
pub struct ValidateCli {}

/// Execute a scan and render it
pub fn execute_scan<W: Write>(config: &ValidatorConfig, out: &mut W) -> io::Result<ExitCode> {
    let report = scan_directory(config);
    ConsoleReporter::new(out).render(&report)?;
    Ok(ExitCode::from_validation_result(!report.all_valid))
}

/// Execute the validator against its own directory
pub fn execute_validate() -> Result<ExitCode, ValidationError> {
    let config = ValidatorConfig::from_executable()?;
    let mut stdout = io::stdout().lock();
    execute_scan(&config, &mut stdout).map_err(ValidationError::Report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        ValidateCli::command().debug_assert();
    }

    #[test]
    fn test_cli_rejects_arguments() {
        assert!(ValidateCli::try_parse_from(["validate-agents"]).is_ok());
        assert!(ValidateCli::try_parse_from(["validate-agents", "--strict"]).is_err());
        assert!(ValidateCli::try_parse_from(["validate-agents", "dir"]).is_err());
    }

    #[test]
    fn test_execute_scan_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let config = ValidatorConfig::new().with_scan_dir(dir.path());

        let mut out = Vec::new();
        assert_eq!(execute_scan(&config, &mut out).unwrap(), ExitCode::Success);

        std::fs::write(dir.path().join("bad.yml"), "name: only\n").unwrap();
        let mut out = Vec::new();
        assert_eq!(
            execute_scan(&config, &mut out).unwrap(),
            ExitCode::ValidationError
        );
    }
}
