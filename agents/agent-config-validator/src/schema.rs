//! Agent configuration checks
//!
//! Validates one YAML agent configuration: required fields, field types,
//! the `major.minor.patch` version convention and `context_files` targets.
//! Only decode failures, missing fields and type mismatches are errors.

use std::path::Path;
use tracing::{debug, info};

use crate::config::ValidatorConfig;
use crate::document::{load_document, Document, DocumentFormat};
use crate::record::AgentConfig;
use crate::validation::{ValidationFinding, ValidationResult};

/// Code family for errors raised while loading a config file
const CONFIG_CODE_FAMILY: u16 = 100;

/// Check one agent configuration file
pub fn check_agent_config(path: &Path, config: &ValidatorConfig) -> ValidationResult {
    debug!(path = %path.display(), "Checking agent configuration");

    let doc = match load_document(path, DocumentFormat::Yaml) {
        Ok(doc) => doc,
        Err(e) => {
            return ValidationResult::with_findings(vec![ValidationFinding::error(
                e.code(CONFIG_CODE_FAMILY),
                e.to_string(),
            )]);
        }
    };

    let result = check_config_document(&doc, &config.repo_root_for(path));
    info!(
        path = %path.display(),
        valid = result.valid,
        warnings = result.warnings().len(),
        "Checked agent configuration"
    );
    result
}

/// Check a decoded agent configuration
///
/// `repo_root` is the base for `context_files` paths.
pub fn check_config_document(doc: &Document, repo_root: &Path) -> ValidationResult {
    let mut result = ValidationResult::valid();

    let agent = match AgentConfig::from_document(doc) {
        Ok(agent) => agent,
        Err(e) => {
            result.add_finding(ValidationFinding::error(e.code(), e.to_string()));
            return result;
        }
    };
    debug!(name = %agent.name, version = %agent.version, "Decoded agent configuration");

    if let Some(finding) = check_version(&agent.version) {
        result.add_finding(finding);
    }

    let optional = match agent.optional_fields() {
        Ok(optional) => optional,
        Err(e) => {
            result.add_finding(ValidationFinding::error(e.code(), e.to_string()));
            return result;
        }
    };

    for context_file in optional.context_files.iter().flatten() {
        if !repo_root.join(context_file).exists() {
            result.add_finding(ValidationFinding::warning(
                "W130",
                format!("context file not found: {}", context_file),
            ));
        }
    }

    result
}

/// Check a version against `major.minor.patch`
///
/// Returns at most one warning. When there are three parts, only the first
/// non-numeric one is reported.
pub fn check_version(version: &str) -> Option<ValidationFinding> {
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 {
        return Some(ValidationFinding::warning(
            "W120",
            "version should follow semantic versioning (major.minor.patch)",
        ));
    }

    parts
        .iter()
        .enumerate()
        .find(|(_, part)| !is_numeric(part))
        .map(|(index, part)| {
            ValidationFinding::warning(
                "W121",
                format!("version part {} ('{}') should be a number", index, part),
            )
        })
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}
