// Scan configuration
//
// Plain data; `ScanConfig::load` is the only part that touches the filesystem.

use crate::utils::ignore::{load_ignore_patterns, IgnorePattern};
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Directory names never descended into
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "build",
    "dist",
    ".dart_tool",
    ".gradle",
    "Pods",
    "target",
    "out",
    ".idea",
    ".vscode",
];

/// What to scan and what to skip
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// Directory names pruned wherever they occur
    pub ignored_dirs: Vec<String>,
    /// Rules from `.codemapignore`
    pub ignore_patterns: Vec<IgnorePattern>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ScanConfig {
    /// Config with the default ignored directories and no custom patterns
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|d| d.to_string()).collect(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Config for `root` with `.codemapignore` applied; the root must exist
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let mut config = Self::new(root);
        if !config.root.is_dir() {
            bail!("Scan root does not exist: {}", config.root.display());
        }
        config.ignore_patterns = load_ignore_patterns(&config.root)?;
        Ok(config)
    }

    pub fn with_ignored_dir(mut self, name: impl Into<String>) -> Self {
        self.ignored_dirs.push(name.into());
        self
    }

    pub fn is_ignored_dir(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.ignored_dirs.iter().any(|d| d == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ignore::IGNORE_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_ignored_dirs() {
        let config = ScanConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.is_ignored_dir(Path::new("web/node_modules")));
        assert!(config.is_ignored_dir(Path::new(".dart_tool")));
        assert!(!config.is_ignored_dir(Path::new("src/my_node_modules")));
    }

    #[test]
    fn test_extra_ignored_dir() {
        let config = ScanConfig::new("/tmp/app").with_ignored_dir("generated");
        assert!(config.is_ignored_dir(Path::new("lib/generated")));
    }

    #[test]
    fn test_load_reads_ignore_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(IGNORE_FILE_NAME), "vendor/\n*.min.js\n").unwrap();

        let config = ScanConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.ignore_patterns.len(), 2);
    }

    #[test]
    fn test_load_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let err = ScanConfig::load(temp_dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
