//! CLI module for the agent configuration validator
//!
//! Runs one scan over the validator's own directory and maps the outcome
//! to a process exit code.

pub mod commands;
pub mod output;

pub use commands::ValidateCli;
pub use output::ConsoleReporter;

use crate::error::ValidationError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every required check passed; warnings allowed
    Success = 0,
    /// At least one fatal check failed
    ValidationError = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from the aggregate scan result
    pub fn from_validation_result(has_errors: bool) -> Self {
        if has_errors {
            ExitCode::ValidationError
        } else {
            ExitCode::Success
        }
    }
}

/// Run the CLI and return the exit code
pub fn run(_cli: ValidateCli) -> Result<ExitCode, ValidationError> {
    commands::execute_validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::ValidationError), 1);
    }

    #[test]
    fn test_exit_code_from_validation_result() {
        assert_eq!(ExitCode::from_validation_result(false), ExitCode::Success);
        assert_eq!(
            ExitCode::from_validation_result(true),
            ExitCode::ValidationError
        );
    }
}
