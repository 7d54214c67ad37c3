//! Typed agent records
//!
//! Records are built from a decoded [`Document`] only after presence and
//! type checks pass, so the rest of the crate never probes raw values.

use serde_json::{Map, Value};

use crate::document::{value_text, Document};
use crate::error::FieldError;

/// Keys every agent configuration must carry
pub const REQUIRED_CONFIG_FIELDS: [&str; 5] =
    ["name", "description", "version", "capabilities", "instructions"];

/// Keys every agent entry in the index must carry
pub const REQUIRED_ENTRY_FIELDS: [&str; 5] = ["id", "name", "description", "version", "config_file"];

/// Expected shape of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    List,
    Mapping,
}

impl FieldType {
    /// Get a human-readable name for this type
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "string",
            FieldType::List => "list",
            FieldType::Mapping => "mapping",
        }
    }

    /// Check if a value matches this expected type
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (FieldType::Text, Value::String(_))
                | (FieldType::List, Value::Array(_))
                | (FieldType::Mapping, Value::Object(_))
        )
    }
}

/// Required fields with a checked type, in checking order.
/// `version` is absent: any scalar is accepted and stringified.
const REQUIRED_FIELD_TYPES: [(&str, FieldType); 4] = [
    ("name", FieldType::Text),
    ("description", FieldType::Text),
    ("capabilities", FieldType::List),
    ("instructions", FieldType::Text),
];

const OPTIONAL_FIELD_TYPES: [(&str, FieldType); 4] = [
    ("languages", FieldType::List),
    ("context_files", FieldType::List),
    ("tools", FieldType::List),
    ("preferences", FieldType::Mapping),
];

/// Return the keys from `required` that `doc` lacks, in declared order
pub fn missing_fields(doc: &Document, required: &[&'static str]) -> Vec<&'static str> {
    required
        .iter()
        .copied()
        .filter(|field| !doc.contains_key(*field))
        .collect()
}

fn check_type(doc: &Document, field: &'static str, expected: FieldType) -> Result<(), FieldError> {
    match doc.get(field) {
        Some(value) if !expected.matches(value) => Err(FieldError::WrongType {
            field,
            expected: expected.type_name(),
        }),
        _ => Ok(()),
    }
}

fn text(doc: &Document, field: &str) -> String {
    doc.get(field).map(value_text).unwrap_or_default()
}

fn list(doc: &Document, field: &str) -> Option<Vec<Value>> {
    doc.get(field).and_then(Value::as_array).cloned()
}

/// One agent configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    /// Version as written, stringified if the document held a number
    pub version: String,
    pub capabilities: Vec<Value>,
    pub instructions: String,
    /// Every key other than the required ones
    pub extra: Document,
}

impl AgentConfig {
    /// Build a config from a document
    ///
    /// Fails with every missing required key, or else with the first
    /// required field whose value has the wrong type.
    pub fn from_document(doc: &Document) -> Result<Self, FieldError> {
        let missing = missing_fields(doc, &REQUIRED_CONFIG_FIELDS);
        if !missing.is_empty() {
            return Err(FieldError::Missing { fields: missing });
        }

        for (field, expected) in REQUIRED_FIELD_TYPES {
            check_type(doc, field, expected)?;
        }

        let extra = doc
            .iter()
            .filter(|(key, _)| !REQUIRED_CONFIG_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            name: text(doc, "name"),
            description: text(doc, "description"),
            version: text(doc, "version"),
            capabilities: list(doc, "capabilities").unwrap_or_default(),
            instructions: text(doc, "instructions"),
            extra,
        })
    }

    /// Type-check the optional keys held in [`AgentConfig::extra`]
    pub fn optional_fields(&self) -> Result<OptionalFields, FieldError> {
        for (field, expected) in OPTIONAL_FIELD_TYPES {
            check_type(&self.extra, field, expected)?;
        }

        Ok(OptionalFields {
            languages: list(&self.extra, "languages"),
            context_files: list(&self.extra, "context_files")
                .map(|files| files.iter().map(value_text).collect()),
            tools: list(&self.extra, "tools"),
            preferences: self.extra.get("preferences").and_then(Value::as_object).cloned(),
        })
    }
}

/// Optional agent configuration keys, present only when declared
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionalFields {
    pub languages: Option<Vec<Value>>,
    /// Paths relative to the repository root
    pub context_files: Option<Vec<String>>,
    pub tools: Option<Vec<Value>>,
    pub preferences: Option<Map<String, Value>>,
}

/// One entry of the agents index
#[derive(Debug, Clone, PartialEq)]
pub struct AgentEntry {
    /// Zero-based position in the `agents` list
    pub position: usize,
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    /// Path relative to the index's directory
    pub config_file: String,
}

impl AgentEntry {
    /// Build an entry from its index mapping
    pub fn from_document(position: usize, doc: &Document) -> Result<Self, FieldError> {
        let missing = missing_fields(doc, &REQUIRED_ENTRY_FIELDS);
        if !missing.is_empty() {
            return Err(FieldError::Missing { fields: missing });
        }

        Ok(Self {
            position,
            id: text(doc, "id"),
            name: text(doc, "name"),
            description: text(doc, "description"),
            version: text(doc, "version"),
            config_file: text(doc, "config_file"),
        })
    }
}
