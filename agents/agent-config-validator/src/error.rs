//! Error types for the agent configuration validator
//!
//! Every error is caught by the checker that produced it and turned into a
//! finding; nothing here escapes past a single file check.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for validation operations
#[derive(Error, Debug)]
pub enum ValidationError {
    /// File could not be opened or read
    #[error("Error reading file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML document is malformed
    #[error("YAML syntax error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON document is malformed
    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document decoded, but its root is not a mapping
    #[error("Document root must be a mapping, found {found}")]
    RootNotMapping { found: &'static str },

    /// Scan directory could not be listed
    #[error("Cannot read directory '{}': {source}", .path.display())]
    ScanDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Location of the running executable could not be determined
    #[error("Cannot determine validator location: {0}")]
    ExecutableLocation(String),

    /// Report could not be written to the console
    #[error("Cannot write report: {0}")]
    Report(#[source] std::io::Error),
}

impl ValidationError {
    /// Create a read error for the given path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ValidationError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a scan directory error for the given path
    pub fn scan_directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ValidationError::ScanDirectory {
            path: path.into(),
            source,
        }
    }

    /// Finding code reported for this error
    ///
    /// Read and root-shape failures share a code family with whichever
    /// checker hit them, so the caller passes the family base (100 for
    /// configs, 200 for the index).
    pub fn code(&self, family: u16) -> String {
        let offset = match self {
            ValidationError::Read { .. } => 0,
            ValidationError::Yaml(_) | ValidationError::Json(_) => 1,
            ValidationError::RootNotMapping { .. } => 2,
            ValidationError::ScanDirectory { .. }
            | ValidationError::ExecutableLocation(_)
            | ValidationError::Report(_) => return "E302".to_string(),
        };
        format!("E{}", family + offset)
    }
}

/// Shape problems found while building a typed record from a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// One or more required keys are absent
    #[error("Missing required fields: {}", .fields.join(", "))]
    Missing { fields: Vec<&'static str> },

    /// A key is present with a value of the wrong type
    #[error("'{field}' must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

impl FieldError {
    /// Finding code reported for this error
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Missing { .. } => "E110",
            FieldError::WrongType { .. } => "E111",
        }
    }
}

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
