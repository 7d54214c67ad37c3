//! Validator settings
//!
//! Fixed at build time; the binary derives the scan directory from its own
//! location and nothing is read from flags or the environment.

use std::path::{Path, PathBuf};

use crate::error::{Result, ValidationError};

/// Settings for one validation run
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Directory holding the agent configurations
    pub scan_dir: PathBuf,
    /// File name of the optional index inside `scan_dir`
    pub index_file_name: String,
    /// Extensions (without dot) that mark agent configuration files
    pub config_extensions: Vec<String>,
    /// Levels above a config file's directory where `context_files` resolve
    pub repo_root_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            scan_dir: PathBuf::from("."),
            index_file_name: "agents.json".to_string(),
            config_extensions: vec!["yml".to_string(), "yaml".to_string()],
            repo_root_depth: 2,
        }
    }
}

impl ValidatorConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Config scanning the directory that holds the running executable
    pub fn from_executable() -> Result<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| ValidationError::ExecutableLocation(e.to_string()))?;
        let dir = exe.parent().ok_or_else(|| {
            ValidationError::ExecutableLocation(format!(
                "'{}' has no parent directory",
                exe.display()
            ))
        })?;
        Ok(Self::new().with_scan_dir(dir))
    }

    /// Set the scan directory
    pub fn with_scan_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scan_dir = dir.into();
        self
    }

    /// Set how far above a config's directory the repository root sits
    pub fn with_repo_root_depth(mut self, depth: usize) -> Self {
        self.repo_root_depth = depth;
        self
    }

    /// Path of the index file
    pub fn index_path(&self) -> PathBuf {
        self.scan_dir.join(&self.index_file_name)
    }

    /// Whether a path names an agent configuration file
    pub fn is_config_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.config_extensions.iter().any(|c| c == ext))
            .unwrap_or(false)
    }

    /// Repository root for a config file
    ///
    /// Walks up from the file's directory; stops early at the filesystem
    /// root.
    pub fn repo_root_for(&self, config_path: &Path) -> PathBuf {
        let mut root = config_path.parent().unwrap_or(Path::new(""));
        for _ in 0..self.repo_root_depth {
            root = root.parent().unwrap_or(root);
        }
        root.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::new();
        assert_eq!(config.index_file_name, "agents.json");
        assert_eq!(config.repo_root_depth, 2);
        assert_eq!(config.index_path(), PathBuf::from("./agents.json"));
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::new()
            .with_scan_dir("/repo/.github/agents")
            .with_repo_root_depth(1);
        assert_eq!(config.scan_dir, PathBuf::from("/repo/.github/agents"));
        assert_eq!(config.repo_root_depth, 1);
    }

    #[test]
    fn test_is_config_file() {
        let config = ValidatorConfig::new();
        assert!(config.is_config_file(Path::new("agent.yml")));
        assert!(config.is_config_file(Path::new("dir/agent.yaml")));
        assert!(!config.is_config_file(Path::new("agents.json")));
        assert!(!config.is_config_file(Path::new("agent.YML")));
        assert!(!config.is_config_file(Path::new("yml")));
    }

    #[test]
    fn test_repo_root_for() {
        let config = ValidatorConfig::new();
        assert_eq!(
            config.repo_root_for(Path::new("/repo/.github/agents/a.yml")),
            PathBuf::from("/repo")
        );
        assert_eq!(config.repo_root_for(Path::new("/a.yml")), PathBuf::from("/"));
        assert_eq!(config.repo_root_for(Path::new("a.yml")), PathBuf::from(""));
    }

    #[test]
    fn test_from_executable_uses_exe_dir() {
        let config = ValidatorConfig::from_executable().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(config.scan_dir.as_path()), exe.parent());
    }
}
