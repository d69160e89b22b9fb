// Project report aggregation
//
// Folds per-file records into one ProjectReport, in discovery order. Records
// are only appended, never revisited; the derived project-wide signals are
// updated as each record arrives.

use crate::extractors::base::registries::is_markup_framework_source;
use crate::extractors::base::{FileRecord, ManifestInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Whole-run output
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub files: Vec<FileRecord>,
    pub uses_embedded_markup_framework: bool,
    pub custom_markup_registry: BTreeSet<String>,
    /// Manifest data, kept even when the manifest record itself is dropped from `files`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platform_manifests: Vec<ManifestInfo>,
}

impl ProjectReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Accumulates records into a [`ProjectReport`]
#[derive(Debug, Default)]
pub struct Aggregator {
    report: ProjectReport,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the report
    ///
    /// Records without symbols, imports or custom markup names are discarded;
    /// only their manifest info survives.
    pub fn fold(&mut self, record: FileRecord) {
        if let Some(info) = &record.manifest_info {
            self.report.platform_manifests.push(info.clone());
        }

        if !record.has_content() {
            tracing::debug!("Dropping empty record: {}", record.path);
            return;
        }

        if record.has_embedded_markup || imports_markup_framework(&record) {
            self.report.uses_embedded_markup_framework = true;
        }

        if let Some(names) = &record.custom_markup_names {
            self.report
                .custom_markup_registry
                .extend(names.iter().cloned());
        }

        self.report.files.push(record);
    }

    /// Records kept so far
    pub fn file_count(&self) -> usize {
        self.report.files.len()
    }

    pub fn finish(self) -> ProjectReport {
        self.report
    }
}

impl Extend<FileRecord> for Aggregator {
    fn extend<I: IntoIterator<Item = FileRecord>>(&mut self, records: I) {
        for record in records {
            self.fold(record);
        }
    }
}

fn imports_markup_framework(record: &FileRecord) -> bool {
    record
        .imports
        .iter()
        .flatten()
        .any(|edge| is_markup_framework_source(edge.source()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{ImportEdge, Symbol};
    use crate::extractors::ExtractorManager;

    fn markup_record(path: &str, names: &[&str]) -> FileRecord {
        let mut record = FileRecord::new(path);
        record.has_embedded_markup = true;
        record.custom_markup_names = Some(names.iter().map(|n| n.to_string()).collect());
        record
    }

    #[test]
    fn test_custom_markup_registry_deduplicates_and_skips_host_tags() {
        let manager = ExtractorManager::new();
        let mut aggregator = Aggregator::new();
        for (path, code) in [
            ("src/a.jsx", "const a = <Foo />;"),
            ("src/b.jsx", "const b = <Foo><span /></Foo>;"),
            ("src/c.jsx", "const c = <div />;"),
        ] {
            aggregator.fold(manager.extract_file(path, code).unwrap());
        }
        let report = aggregator.finish();

        assert_eq!(
            report.custom_markup_registry.into_iter().collect::<Vec<_>>(),
            vec!["Foo".to_string()]
        );
        // c.jsx has markup but no content, so it never reaches `files`
        let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/a.jsx", "src/b.jsx"]);
    }

    #[test]
    fn test_framework_import_sets_project_flag() {
        let record = ExtractorManager::new()
            .extract_file("src/hooks.js", r#"import {useState} from "react""#)
            .unwrap();
        assert_eq!(
            record.imports.as_deref(),
            Some(&[ImportEdge::new("react", vec!["useState".to_string()])][..])
        );

        let mut aggregator = Aggregator::new();
        aggregator.fold(record);
        let report = aggregator.finish();
        assert!(report.uses_embedded_markup_framework);
        assert_eq!(report.files.len(), 1);
    }

    #[test]
    fn test_empty_records_are_discarded() {
        let mut aggregator = Aggregator::new();
        aggregator.fold(FileRecord::new("src/empty.ts"));

        let mut with_symbol = FileRecord::new("src/f.ts");
        with_symbol.symbols = Some(vec![Symbol::function("f")]);
        aggregator.fold(with_symbol);

        assert_eq!(aggregator.file_count(), 1);
        let report = aggregator.finish();
        assert!(!report.uses_embedded_markup_framework);
        assert!(report.custom_markup_registry.is_empty());
    }

    #[test]
    fn test_discarded_record_does_not_set_markup_flag() {
        let mut record = FileRecord::new("src/frag.jsx");
        record.has_embedded_markup = true;

        let mut aggregator = Aggregator::new();
        aggregator.fold(record);
        assert!(!aggregator.finish().uses_embedded_markup_framework);
    }

    #[test]
    fn test_manifest_info_survives_emptiness_rule() {
        let record = ExtractorManager::new()
            .extract_file(
                "app/src/main/AndroidManifest.xml",
                r#"<manifest package="com.app"><activity android:name=".Main"/></manifest>"#,
            )
            .unwrap();

        let mut aggregator = Aggregator::new();
        aggregator.fold(record);
        let report = aggregator.finish();
        assert!(report.files.is_empty());
        assert_eq!(
            report.platform_manifests,
            vec![ManifestInfo {
                package: Some("com.app".to_string()),
                components: Some(vec![".Main".to_string()]),
            }]
        );
    }

    #[test]
    fn test_extend_folds_in_order_and_serializes_camel_case() {
        let mut aggregator = Aggregator::new();
        aggregator.extend([markup_record("b.tsx", &["Card"]), markup_record("a.tsx", &["App"])]);
        let report = aggregator.finish();

        let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["b.tsx", "a.tsx"]);

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["usesEmbeddedMarkupFramework"], true);
        assert_eq!(json["customMarkupRegistry"], serde_json::json!(["App", "Card"]));
        assert!(json.get("platformManifests").is_none());
        assert_eq!(json["files"][0]["customMarkupNames"], serde_json::json!(["Card"]));
    }
}
