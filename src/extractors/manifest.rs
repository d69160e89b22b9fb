// AndroidManifest.xml extractor
//
// Attribute scraping only; the markup is never parsed structurally. Any element
// carrying `android:name` contributes a component, so `<uses-permission>` and
// `<meta-data>` entries show up in the list as well.

use crate::error::ExtractResult;
use crate::extractors::base::{non_empty, BaseExtractor, FileExtractor, FileRecord, ManifestInfo};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bpackage\s*=\s*"([^"]*)""#).unwrap());

static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bandroid:name\s*=\s*"([^"]*)""#).unwrap());

/// Extractor for platform manifest files
#[derive(Debug, Default)]
pub struct ManifestExtractor;

impl ManifestExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FileExtractor for ManifestExtractor {
    fn language(&self) -> &'static str {
        "android_manifest"
    }

    fn extract(&self, file_path: &str, content: &str) -> ExtractResult<FileRecord> {
        let base = BaseExtractor::new(self.language(), file_path, content);
        let mut record = base.record();

        let package = PACKAGE_RE
            .captures(content)
            .map(|caps| caps[1].to_string());
        let components: Vec<String> = COMPONENT_RE
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect();

        debug!(
            "Manifest {}: package={:?}, {} components",
            base.file_path,
            package,
            components.len()
        );

        // Missing attributes leave fields absent, the info itself is always present
        record.manifest_info = Some(ManifestInfo {
            package,
            components: non_empty(components),
        });
        Ok(record)
    }
}
