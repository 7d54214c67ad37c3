//! Agent Configuration Validator CLI
//!
//! Validates the agent configurations and `agents.json` index in the
//! directory holding this executable.
//!
//! # Usage
//!
//! ```bash
//! validate-agents
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success - all required checks passed
//! - 1: At least one check failed

use agent_config_validator::{run_cli, ValidateCli};
use clap::Parser;

fn main() {
    // Diagnostics go to stdout; tracing logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = ValidateCli::parse();

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
