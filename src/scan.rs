//! Project scan driver
//!
//! Walks the root with the `ignore` crate, keeps supported paths in sorted
//! order, then reads, extracts and folds one file at a time. A file that cannot
//! be read or extracted is recorded as a [`FileFailure`] and skipped; the scan
//! itself only fails when the root is unusable.

use crate::aggregator::{Aggregator, ProjectReport};
use crate::config::ScanConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::extractors::{ExtractorManager, FileRecord};
use crate::language::is_supported_file;
use crate::utils::ignore::is_ignored_by_pattern;
use crate::utils::paths::to_relative_unix_style;
use anyhow::{bail, Result};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A file skipped during the scan, with the reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileFailure {
    pub path: String,
    pub reason: String,
}

/// Report plus the files that did not make it into it
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub report: ProjectReport,
    pub failures: Vec<FileFailure>,
}

/// One discovered file: its path on disk and its record path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub absolute: PathBuf,
    pub relative: String,
}

/// Supported files under the root, sorted by relative path
pub fn discover_files(config: &ScanConfig) -> Result<Vec<DiscoveredFile>> {
    let root = config.root.clone();
    if !root.is_dir() {
        bail!("Scan root does not exist: {}", root.display());
    }

    let filter_config = config.clone();
    let walker = WalkBuilder::new(&root)
        .require_git(false)
        .filter_entry(move |entry| {
            let path = entry.path();
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir && entry.depth() > 0 && filter_config.is_ignored_dir(path) {
                return false;
            }
            match path.strip_prefix(&filter_config.root) {
                Ok(rel) if !rel.as_os_str().is_empty() => !is_ignored_by_pattern(
                    &rel.to_string_lossy(),
                    &filter_config.ignore_patterns,
                ),
                _ => true,
            }
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry during walk: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = match to_relative_unix_style(path, &root) {
            Ok(relative) => relative,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        if is_supported_file(&relative) {
            files.push(DiscoveredFile {
                absolute: path.to_path_buf(),
                relative,
            });
        }
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    debug!("Discovered {} supported files under {}", files.len(), root.display());
    Ok(files)
}

/// Scan the whole project, one file at a time
pub fn scan_project(config: &ScanConfig) -> Result<ScanOutcome> {
    let files = discover_files(config)?;
    let manager = ExtractorManager::new();
    let mut aggregator = Aggregator::new();
    let mut failures = Vec::new();

    for file in &files {
        match extract_one(&manager, &file.absolute, &file.relative) {
            Ok(record) => aggregator.fold(record),
            Err(e) => {
                warn!("Skipping {}: {}", file.relative, e);
                failures.push(FileFailure {
                    path: file.relative.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Scanned {} files: {} in report, {} failed",
        files.len(),
        aggregator.file_count(),
        failures.len()
    );

    Ok(ScanOutcome {
        report: aggregator.finish(),
        failures,
    })
}

fn extract_one(
    manager: &ExtractorManager,
    absolute: &Path,
    relative: &str,
) -> ExtractResult<FileRecord> {
    let content = fs::read_to_string(absolute).map_err(|source| ExtractError::Read {
        path: relative.to_string(),
        source,
    })?;
    manager.extract_file(relative, &content)
}
