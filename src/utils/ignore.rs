//! `.codemapignore` support
//!
//! Patterns are parsed once into [`IgnorePattern`] and matched against
//! forward-slash paths relative to the scan root.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the per-project ignore file
pub const IGNORE_FILE_NAME: &str = ".codemapignore";

/// One custom ignore rule
///
/// - `dir/`: a whole path component, plus everything below it
/// - `*.ext`: a filename suffix
/// - other wildcards (`*`, `?`, `[`): a glob over the relative path
/// - anything else: a substring of the path
#[derive(Debug, Clone)]
pub enum IgnorePattern {
    Directory(String),
    Suffix(String),
    Glob(glob::Pattern),
    Substring(String),
}

impl IgnorePattern {
    /// Parse one pattern line; invalid globs fall back to substring matching
    pub fn parse(line: &str) -> Self {
        if let Some(dir_name) = line.strip_suffix('/') {
            return IgnorePattern::Directory(dir_name.to_string());
        }
        if let Some(suffix) = line.strip_prefix('*') {
            if suffix.starts_with('.') && !has_wildcard(suffix) {
                return IgnorePattern::Suffix(suffix.to_string());
            }
        }
        if has_wildcard(line) {
            match glob::Pattern::new(line) {
                Ok(pattern) => return IgnorePattern::Glob(pattern),
                Err(e) => warn!("Invalid ignore glob '{}': {}", line, e),
            }
        }
        IgnorePattern::Substring(line.to_string())
    }

    /// Whether a relative forward-slash path matches this rule
    pub fn matches(&self, rel_path: &str) -> bool {
        match self {
            // Component match: "packages/" hits "src/packages" but not "my-packages"
            IgnorePattern::Directory(dir_name) => {
                rel_path.split('/').any(|component| component == dir_name)
            }
            IgnorePattern::Suffix(suffix) => rel_path.ends_with(suffix.as_str()),
            IgnorePattern::Glob(pattern) => pattern.matches(rel_path),
            IgnorePattern::Substring(needle) => rel_path.contains(needle.as_str()),
        }
    }
}

fn has_wildcard(text: &str) -> bool {
    text.contains(['*', '?', '['])
}

/// Load custom ignore patterns from `.codemapignore` in the scan root
///
/// Blank lines and `#` comments are skipped. A missing file means no patterns.
///
/// ```text
/// # .codemapignore
/// generated/
/// *.min.js
/// lib/**/*.g.dart
/// ```
pub fn load_ignore_patterns(root: &Path) -> Result<Vec<IgnorePattern>> {
    let ignore_file = root.join(IGNORE_FILE_NAME);
    if !ignore_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read {}", ignore_file.display()))?;

    let patterns: Vec<IgnorePattern> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(IgnorePattern::parse)
        .collect();

    if !patterns.is_empty() {
        debug!(
            "Loaded {} custom ignore patterns from {}",
            patterns.len(),
            IGNORE_FILE_NAME
        );
    }

    Ok(patterns)
}

/// Check if a relative path matches any custom ignore pattern
pub fn is_ignored_by_pattern(rel_path: &str, patterns: &[IgnorePattern]) -> bool {
    let rel_path = rel_path.replace('\\', "/");
    patterns.iter().any(|pattern| pattern.matches(&rel_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn patterns(lines: &[&str]) -> Vec<IgnorePattern> {
        lines.iter().map(|line| IgnorePattern::parse(line)).collect()
    }

    #[test]
    fn test_missing_ignore_file_yields_no_patterns() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_ignore_patterns(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_skips_comments_and_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(IGNORE_FILE_NAME),
            "# Comment line\ngenerated/\n*.min.js\n\n  lib/**/*.g.dart  \n# Another comment\n",
        )
        .unwrap();

        let loaded = load_ignore_patterns(temp_dir.path()).unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(matches!(&loaded[0], IgnorePattern::Directory(d) if d == "generated"));
        assert!(matches!(&loaded[1], IgnorePattern::Suffix(s) if s == ".min.js"));
        assert!(matches!(&loaded[2], IgnorePattern::Glob(_)));
    }

    #[test]
    fn test_directory_pattern_respects_component_boundaries() {
        let rules = patterns(&["packages/"]);
        assert!(is_ignored_by_pattern("packages", &rules));
        assert!(is_ignored_by_pattern("src/packages", &rules));
        assert!(is_ignored_by_pattern("packages/file.js", &rules));

        assert!(!is_ignored_by_pattern("my-packages", &rules));
        assert!(!is_ignored_by_pattern("src/subpackages/a.js", &rules));
        assert!(!is_ignored_by_pattern("packages-old/a.js", &rules));
    }

    #[test]
    fn test_suffix_glob_and_substring_patterns() {
        let rules = patterns(&["*.min.js", "lib/**/*.g.dart", "temp"]);
        assert!(is_ignored_by_pattern("web/app.min.js", &rules));
        assert!(is_ignored_by_pattern("lib/models/user.g.dart", &rules));
        assert!(is_ignored_by_pattern("temp_files/data.ts", &rules));

        assert!(!is_ignored_by_pattern("web/app.js", &rules));
        assert!(!is_ignored_by_pattern("lib/models/user.dart", &rules));
    }

    #[test]
    fn test_backslash_paths_are_normalized() {
        let rules = patterns(&["generated/"]);
        assert!(is_ignored_by_pattern("src\\generated\\api.ts", &rules));
    }
}
