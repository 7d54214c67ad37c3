//! Agent Configuration Validator
//!
//! Validates agent configuration files (YAML) and the optional `agents.json`
//! index that sit next to the validator, printing diagnostics and returning
//! a process exit status.
//!
//! ## Checks
//!
//! - **Agent configurations** (`schema`): required fields `name`,
//!   `description`, `version`, `capabilities`, `instructions`; field types;
//!   optional `languages`, `context_files`, `tools`, `preferences`.
//!   Version format and missing `context_files` targets are warnings only.
//! - **Agents index** (`index`): an `agents` list whose entries carry `id`,
//!   `name`, `description`, `version` and an existing `config_file`.
//! - **Directory scan** (`scan`): checks every `*.yml`/`*.yaml` file and the
//!   index, aggregating a single pass/fail verdict.
//!
//! ## Exit Codes
//!
//! - 0: every required check passed (warnings allowed)
//! - 1: at least one check failed
//!
//! ## Example
//!
//! ```rust,no_run
//! use agent_config_validator::{scan_directory, ValidatorConfig};
//!
//! let config = ValidatorConfig::new().with_scan_dir(".github/agents");
//! let report = scan_directory(&config);
//! println!("all valid: {}", report.all_valid);
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod record;
pub mod schema;
pub mod scan;
pub mod validation;

pub use cli::{ExitCode, ValidateCli};
pub use config::ValidatorConfig;
pub use document::{decode_document, load_document, Document, DocumentFormat};
pub use error::{FieldError, ValidationError};
pub use index::{check_agent_index, check_index_document};
pub use record::{AgentConfig, AgentEntry, FieldType, OptionalFields};
pub use scan::{scan_directory, CheckKind, FileReport, ScanEntry, ScanReport};
pub use schema::{check_agent_config, check_config_document, check_version};
pub use validation::{ValidationFinding, ValidationResult, ValidationSeverity};

/// Validator version (from Cargo.toml)
pub const VALIDATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI application
///
/// This is the main entry point for the CLI binary.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use agent_config_validator::{ValidateCli, run_cli};
///
/// fn main() {
///     let cli = ValidateCli::parse();
///     let exit_code = run_cli(cli);
///     std::process::exit(exit_code.into());
/// }
/// ```
pub fn run_cli(cli: ValidateCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::ValidationError
        }
    }
}
