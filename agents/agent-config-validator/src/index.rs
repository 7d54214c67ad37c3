//! Agents index checks
//!
//! Validates `agents.json`: the `agents` list, the required keys of every
//! entry, and that each entry's `config_file` exists next to the index.
//! Unlike `context_files` in a config, a missing `config_file` is an error.

use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::document::{load_document, Document, DocumentFormat};
use crate::record::AgentEntry;
use crate::validation::{ValidationFinding, ValidationResult};

/// Code family for errors raised while loading the index
const INDEX_CODE_FAMILY: u16 = 200;

/// Check the agents index file
pub fn check_agent_index(path: &Path) -> ValidationResult {
    debug!(path = %path.display(), "Checking agents index");

    let doc = match load_document(path, DocumentFormat::Json) {
        Ok(doc) => doc,
        Err(e) => {
            return ValidationResult::with_findings(vec![ValidationFinding::error(
                e.code(INDEX_CODE_FAMILY),
                e.to_string(),
            )]);
        }
    };

    let base_dir = path.parent().unwrap_or(Path::new(""));
    let result = check_index_document(&doc, base_dir);
    info!(path = %path.display(), valid = result.valid, "Checked agents index");
    result
}

/// Check a decoded index
///
/// Every entry is checked; `config_file` paths resolve against `base_dir`.
pub fn check_index_document(doc: &Document, base_dir: &Path) -> ValidationResult {
    let mut result = ValidationResult::valid();

    let agents = match doc.get("agents") {
        None => {
            result.add_finding(ValidationFinding::error("E210", "Missing 'agents' field"));
            return result;
        }
        Some(Value::Array(agents)) => agents,
        Some(_) => {
            result.add_finding(ValidationFinding::error("E211", "'agents' must be a list"));
            return result;
        }
    };
    debug!(entries = agents.len(), "Decoded agents index");

    for (position, value) in agents.iter().enumerate() {
        let Value::Object(entry_doc) = value else {
            result.add_finding(ValidationFinding::error(
                "E221",
                format!("Agent {}: entry must be a mapping", position),
            ));
            continue;
        };

        let entry = match AgentEntry::from_document(position, entry_doc) {
            Ok(entry) => entry,
            Err(e) => {
                result.add_finding(ValidationFinding::error(
                    "E220",
                    format!("Agent {}: {}", position, e),
                ));
                continue;
            }
        };

        if !base_dir.join(&entry.config_file).exists() {
            result.add_finding(ValidationFinding::error(
                "E230",
                format!(
                    "Agent {}: Config file not found: {}",
                    entry.position, entry.config_file
                ),
            ));
        }
    }

    result
}
