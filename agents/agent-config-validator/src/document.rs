//! Document decoding
//!
//! Reads a file and decodes it into a generic mapping. YAML and JSON both
//! land in `serde_json::Value` so the checkers see one tree shape.

use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::validation::value_type_name;

/// Supported on-disk document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Agent configuration files
    Yaml,
    /// The agents index
    Json,
}

/// A decoded document whose root is a mapping
pub type Document = Map<String, Value>;

/// Read and decode a file
///
/// The file handle is closed before decoding starts.
pub fn load_document(path: &Path, format: DocumentFormat) -> Result<Document> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ValidationError::read(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), ?format, "Read document");
    decode_document(&content, format)
}

/// Decode document text, requiring a mapping at the root
pub fn decode_document(content: &str, format: DocumentFormat) -> Result<Document> {
    let value: Value = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Json => serde_json::from_str(content)?,
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ValidationError::RootNotMapping {
            found: value_type_name(&other),
        }),
    }
}

/// Render a scalar the way it reads in the source document
///
/// Used where text is expected but the document may hold a number, e.g. an
/// unquoted `version: 1.0` in YAML.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_yaml_mapping() {
        let doc = decode_document("name: test\nnumber: 42", DocumentFormat::Yaml).unwrap();
        assert_eq!(doc["name"], "test");
        assert_eq!(doc["number"], 42);
    }

    #[test]
    fn test_decode_json_mapping() {
        let doc = decode_document(r#"{"agents": []}"#, DocumentFormat::Json).unwrap();
        assert_eq!(doc["agents"], json!([]));
    }

    #[test]
    fn test_decode_rejects_list_root() {
        let err = decode_document("- a\n- b\n", DocumentFormat::Yaml).unwrap_err();
        assert!(matches!(err, ValidationError::RootNotMapping { found: "list" }));
    }

    #[test]
    fn test_decode_syntax_errors() {
        let err = decode_document("name: [unclosed", DocumentFormat::Yaml).unwrap_err();
        assert!(matches!(err, ValidationError::Yaml(_)));

        let err = decode_document("{\"agents\": ", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, ValidationError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.yml"), DocumentFormat::Yaml).unwrap_err();
        assert!(matches!(err, ValidationError::Read { .. }));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("1.2.3")), "1.2.3");
        assert_eq!(value_text(&json!(1.5)), "1.5");
        assert_eq!(value_text(&json!(3)), "3");
        assert_eq!(value_text(&json!(true)), "true");
    }
}
