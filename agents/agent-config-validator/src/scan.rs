//! Directory scan
//!
//! Finds agent configurations in the scan directory, checks each one, then
//! checks the optional index. The only state carried across files is the
//! aggregate `all_valid` flag.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::ValidatorConfig;
use crate::error::{Result, ValidationError};
use crate::index::check_agent_index;
use crate::schema::check_agent_config;
use crate::validation::{ValidationFinding, ValidationResult};

/// Which checker produced a file report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    AgentConfig,
    AgentIndex,
}

impl CheckKind {
    /// Message shown when a file passes
    pub fn success_message(&self) -> &'static str {
        match self {
            CheckKind::AgentConfig => "Valid agent configuration",
            CheckKind::AgentIndex => "Valid agents index",
        }
    }
}

/// Outcome of checking one file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub kind: CheckKind,
    pub result: ValidationResult,
}

/// One step of a scan, in the order it happened
#[derive(Debug, Clone)]
pub enum ScanEntry {
    /// Scan-level notice not tied to a file
    Notice(ValidationFinding),
    /// A checked file
    File(FileReport),
}

/// Outcome of a whole scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub entries: Vec<ScanEntry>,
    /// False once any fatal finding was recorded
    pub all_valid: bool,
}

impl ScanReport {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            all_valid: true,
        }
    }

    fn push_notice(&mut self, finding: ValidationFinding) {
        if finding.is_error() {
            self.all_valid = false;
        }
        self.entries.push(ScanEntry::Notice(finding));
    }

    fn push_file(&mut self, path: PathBuf, kind: CheckKind, result: ValidationResult) {
        if !result.valid {
            self.all_valid = false;
        }
        self.entries.push(ScanEntry::File(FileReport { path, kind, result }));
    }

    /// Reports for checked files
    pub fn files(&self) -> impl Iterator<Item = &FileReport> {
        self.entries.iter().filter_map(|entry| match entry {
            ScanEntry::File(report) => Some(report),
            ScanEntry::Notice(_) => None,
        })
    }

    /// Scan-level notices
    pub fn notices(&self) -> impl Iterator<Item = &ValidationFinding> {
        self.entries.iter().filter_map(|entry| match entry {
            ScanEntry::Notice(finding) => Some(finding),
            ScanEntry::File(_) => None,
        })
    }
}

/// List agent configuration files in the scan directory, sorted by name
pub fn discover_config_files(config: &ValidatorConfig) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(&config.scan_dir)
        .map_err(|e| ValidationError::scan_directory(&config.scan_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if path.is_file() && config.is_config_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Scan the configured directory and check everything found
pub fn scan_directory(config: &ValidatorConfig) -> ScanReport {
    let mut report = ScanReport::new();
    info!(dir = %config.scan_dir.display(), "Scanning for agent configurations");

    match discover_config_files(config) {
        Ok(files) => {
            debug!(count = files.len(), "Discovered agent configurations");
            if files.is_empty() {
                report.push_notice(ValidationFinding::warning(
                    "W300",
                    "No agent configuration files found (.yml or .yaml)",
                ));
            }
            for path in files {
                let result = check_agent_config(&path, config);
                report.push_file(path, CheckKind::AgentConfig, result);
            }
        }
        Err(e) => {
            warn!(error = %e, "Scan directory unreadable");
            report.push_notice(ValidationFinding::error(e.code(0), e.to_string()));
        }
    }

    check_index_if_present(&config.index_path(), &config.index_file_name, &mut report);

    info!(all_valid = report.all_valid, "Scan complete");
    report
}

fn check_index_if_present(index_path: &Path, file_name: &str, report: &mut ScanReport) {
    if index_path.exists() {
        let result = check_agent_index(index_path);
        report.push_file(index_path.to_path_buf(), CheckKind::AgentIndex, result);
    } else {
        report.push_notice(ValidationFinding::info(
            "I301",
            format!("{} not found (optional)", file_name),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "name: reviewer\ndescription: Reviews code\nversion: 1.0.0\ncapabilities:\n  - review\ninstructions: Be kind.\n";

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.yaml", "a.yml", "agents.json", "notes.txt"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.yml")).unwrap();

        let config = ValidatorConfig::new().with_scan_dir(dir.path());
        let files = discover_config_files(&config).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.yml", "b.yaml"]);
    }

    #[test]
    fn test_empty_directory_passes_with_notices() {
        let dir = tempfile::tempdir().unwrap();
        let report = scan_directory(&ValidatorConfig::new().with_scan_dir(dir.path()));
        assert!(report.all_valid);
        assert_eq!(report.files().count(), 0);
        let codes: Vec<_> = report.notices().map(|n| n.code.as_str()).collect();
        assert_eq!(codes, vec!["W300", "I301"]);
    }

    #[test]
    fn test_one_bad_file_fails_scan_but_others_still_checked() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yml"), "name: [broken\n").unwrap();
        std::fs::write(dir.path().join("b.yml"), VALID).unwrap();

        let report = scan_directory(&ValidatorConfig::new().with_scan_dir(dir.path()));
        assert!(!report.all_valid);
        let verdicts: Vec<_> = report.files().map(|f| f.result.valid).collect();
        assert_eq!(verdicts, vec![false, true]);
    }

    #[test]
    fn test_index_checked_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("reviewer.yml"), VALID).unwrap();
        std::fs::write(
            dir.path().join("agents.json"),
            r#"{"agents": [{"id": "r", "name": "R", "description": "d", "version": "1.0.0", "config_file": "missing.yml"}]}"#,
        )
        .unwrap();

        let report = scan_directory(&ValidatorConfig::new().with_scan_dir(dir.path()));
        assert!(!report.all_valid);
        let index = report
            .files()
            .find(|f| f.kind == CheckKind::AgentIndex)
            .unwrap();
        assert!(index.result.has_code("E230"));
        assert_eq!(report.notices().count(), 0);
    }

    #[test]
    fn test_unreadable_scan_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ValidatorConfig::new().with_scan_dir(dir.path().join("gone"));
        let report = scan_directory(&config);
        assert!(!report.all_valid);
        assert!(report.notices().any(|n| n.code == "E302"));
    }
}
