// Dart Extractor - regex-driven widget/state classification for Flutter code
//
// No grammar is consulted for Dart. The extractor runs ordered regex scans over
// the raw text, so results are approximate by nature, but deterministic and
// tolerant of any input.
//
// Scan order:
// 1. class headers (name + superclass)
// 2. widget / stateless / stateful classification per class
// 3. file-scoped state idiom, annotations, package dependencies
// 4. quoted import paths and the state idioms they reveal
// 5. test-file and widget-test markers

mod helpers;
mod types;

use crate::error::ExtractResult;
use crate::extractors::base::registries::{STATE_MANAGEMENT_PATTERNS, STATE_PACKAGE_FRAGMENTS};
use crate::extractors::base::{non_empty, BaseExtractor, FileExtractor, FileRecord, ImportEdge};
use helpers::{FLUTTER_IMPORT_PREFIX, IMPORT_RE, TEST_FILE_SUFFIXES, WIDGET_TESTER_TYPE, WIDGET_TEST_RE};
use std::collections::HashSet;
use tracing::debug;

/// Dart language extractor that handles Flutter widget conventions
///
/// Supports:
/// - Class headers with superclass
/// - Widget, StatelessWidget and StatefulWidget classification
/// - State-management idiom detection (text and import provenance)
/// - Annotation markers and `package:` dependencies
/// - Widget test files
#[derive(Debug, Default)]
pub struct DartExtractor;

impl DartExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FileExtractor for DartExtractor {
    fn language(&self) -> &'static str {
        "dart"
    }

    fn extract(&self, file_path: &str, content: &str) -> ExtractResult<FileRecord> {
        let base = BaseExtractor::new(self.language(), file_path, content);
        let mut record = base.record();
        record.is_widget_lang_file = true;

        let headers = types::scan_classes(content);
        let traits = types::scan_file_traits(content, &headers);
        let symbols: Vec<_> = headers
            .iter()
            .map(|header| types::build_class_symbol(content, header, &traits))
            .collect();

        let import_paths = scan_import_paths(content);
        record.is_widget_framework_file = import_paths
            .iter()
            .any(|path| path.starts_with(FLUTTER_IMPORT_PREFIX));
        record.dominant_state_pattern = dominant_state_pattern(&import_paths);

        record.is_test_file = is_test_path(&base.file_path);
        record.has_widget_tests =
            WIDGET_TEST_RE.is_match(content) || content.contains(WIDGET_TESTER_TYPE);

        debug!(
            "Extracted {} classes, {} imports from dart file: {}",
            symbols.len(),
            import_paths.len(),
            base.file_path
        );

        record.symbols = non_empty(symbols);
        record.imports = non_empty(import_paths.into_iter().map(ImportEdge::bare).collect());
        Ok(record)
    }
}

/// Quoted import paths, occurrence order
fn scan_import_paths(content: &str) -> Vec<String> {
    IMPORT_RE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Comma-joined idioms revealed by imported package paths, registry order
fn dominant_state_pattern(import_paths: &[String]) -> Option<String> {
    let found: HashSet<&str> = import_paths
        .iter()
        .flat_map(|path| {
            STATE_PACKAGE_FRAGMENTS
                .iter()
                .filter(move |(fragment, _)| path.contains(fragment))
                .map(|(_, idiom)| *idiom)
        })
        .collect();

    let ordered: Vec<&str> = STATE_MANAGEMENT_PATTERNS
        .iter()
        .copied()
        .filter(|idiom| found.contains(idiom))
        .collect();

    (!ordered.is_empty()).then(|| ordered.join(", "))
}

fn is_test_path(file_path: &str) -> bool {
    TEST_FILE_SUFFIXES
        .iter()
        .any(|suffix| file_path.ends_with(suffix))
}
