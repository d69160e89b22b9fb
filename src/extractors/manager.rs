//! ExtractorManager - Public API for per-file extraction
//!
//! Resolves a path to its dialect and delegates to the matching extractor.
//! Extractor errors propagate to the caller unchanged; nothing is swallowed here.

use crate::error::{ExtractError, ExtractResult};
use crate::extractors::base::{FileExtractor, FileRecord};
use crate::extractors::dart::DartExtractor;
use crate::extractors::kotlin::KotlinExtractor;
use crate::extractors::manifest::ManifestExtractor;
use crate::extractors::typescript::TypeScriptExtractor;
use crate::language::{detect_dialect, Dialect};

/// Dispatcher over all dialect extractors
pub struct ExtractorManager {
    // No state needed - each call builds its own extractor and visitor context
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Dialect names the manager can dispatch to
    pub fn supported_languages(&self) -> Vec<&'static str> {
        [
            Dialect::JavaScript,
            Dialect::TypeScript,
            Dialect::Dart,
            Dialect::Kotlin,
            Dialect::AndroidManifest,
        ]
        .iter()
        .map(Dialect::name)
        .collect()
    }

    /// Build the extractor for a dialect
    pub fn extractor_for(&self, dialect: Dialect) -> Box<dyn FileExtractor> {
        match dialect {
            Dialect::JavaScript | Dialect::TypeScript => Box::new(TypeScriptExtractor::new(dialect)),
            Dialect::Dart => Box::new(DartExtractor::new()),
            Dialect::Kotlin => Box::new(KotlinExtractor::new()),
            Dialect::AndroidManifest => Box::new(ManifestExtractor::new()),
        }
    }

    /// Extract one file's record, choosing the extractor from its path
    pub fn extract_file(&self, file_path: &str, content: &str) -> ExtractResult<FileRecord> {
        let dialect = detect_dialect(file_path)
            .ok_or_else(|| ExtractError::UnsupportedFile(file_path.to_string()))?;

        let record = self.extractor_for(dialect).extract(file_path, content)?;

        tracing::debug!(
            "Dispatched {} to {} extractor",
            record.path,
            dialect.name()
        );
        Ok(record)
    }
}
