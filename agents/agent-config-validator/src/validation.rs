//! Findings model shared by the checkers
//!
//! A checker records severity-tagged findings into a [`ValidationResult`];
//! the result stays valid until an error-severity finding is added.

use serde::{Deserialize, Serialize};

/// Severity levels for validation findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    /// Fatal: the file fails validation
    Error,
    /// Reported but does not affect the exit status
    Warning,
    /// Informational notice
    Info,
}

impl std::fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationSeverity::Error => write!(f, "error"),
            ValidationSeverity::Warning => write!(f, "warning"),
            ValidationSeverity::Info => write!(f, "info"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFinding {
    /// Severity of the finding
    pub severity: ValidationSeverity,
    /// Stable code for this finding type
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationFinding {
    /// Create a new error finding
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Error,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning finding
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Warning,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new info finding
    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Info,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == ValidationSeverity::Error
    }
}

/// Result of checking one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the file passed (no errors)
    pub valid: bool,
    /// Findings in the order they were detected
    pub findings: Vec<ValidationFinding>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationResult {
    /// Create a new valid result
    pub fn valid() -> Self {
        Self {
            valid: true,
            findings: Vec::new(),
        }
    }

    /// Create a result with findings
    pub fn with_findings(findings: Vec<ValidationFinding>) -> Self {
        let valid = !findings.iter().any(ValidationFinding::is_error);
        Self { valid, findings }
    }

    /// Add a finding
    pub fn add_finding(&mut self, finding: ValidationFinding) {
        if finding.is_error() {
            self.valid = false;
        }
        self.findings.push(finding);
    }

    /// Get all errors
    pub fn errors(&self) -> Vec<&ValidationFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == ValidationSeverity::Error)
            .collect()
    }

    /// Get all warnings
    pub fn warnings(&self) -> Vec<&ValidationFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == ValidationSeverity::Warning)
            .collect()
    }

    /// Whether any finding carries the given code
    pub fn has_code(&self, code: &str) -> bool {
        self.findings.iter().any(|f| f.code == code)
    }
}

/// Get the type name of a decoded value, as used in diagnostics
pub fn value_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_severity_display() {
        assert_eq!(ValidationSeverity::Error.to_string(), "error");
        assert_eq!(ValidationSeverity::Warning.to_string(), "warning");
        assert_eq!(ValidationSeverity::Info.to_string(), "info");
    }

    #[test]
    fn test_validation_result_valid() {
        let result = ValidationResult::valid();
        assert!(result.valid);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_warnings_keep_result_valid() {
        let mut result = ValidationResult::valid();
        result.add_finding(ValidationFinding::warning("W120", "odd version"));
        assert!(result.valid);
        assert_eq!(result.warnings().len(), 1);
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_validation_result_with_findings() {
        let findings = vec![
            ValidationFinding::warning("W130", "Warning"),
            ValidationFinding::error("E110", "Error"),
        ];
        let result = ValidationResult::with_findings(findings);
        assert!(!result.valid);
        assert_eq!(result.findings.len(), 2);
        assert!(result.has_code("E110"));
        assert!(!result.has_code("E111"));
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&serde_json::json!(null)), "null");
        assert_eq!(value_type_name(&serde_json::json!([1])), "list");
        assert_eq!(value_type_name(&serde_json::json!({"a": 1})), "mapping");
        assert_eq!(value_type_name(&serde_json::json!("x")), "string");
    }
}
