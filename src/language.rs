//! Language Support - dialect detection and tree-sitter configuration
//!
//! This module is the single place that maps file paths to dialects. The
//! dispatcher, the scan driver and the traversal filter all go through it, so a
//! path is either supported everywhere or nowhere.

use crate::error::{ExtractError, ExtractResult};
use std::path::Path;

/// Filename that marks a platform manifest
pub const MANIFEST_FILE_NAME: &str = "AndroidManifest.xml";

/// Source dialects understood by the extractors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// JS/JSX, plain grammar
    JavaScript,
    /// TS/TSX, typed grammar with embedded markup
    TypeScript,
    /// Dart (Flutter widgets), regex-driven
    Dart,
    /// Kotlin and Java sources, regex-driven
    Kotlin,
    /// `AndroidManifest.xml`
    AndroidManifest,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::JavaScript => "javascript",
            Dialect::TypeScript => "typescript",
            Dialect::Dart => "dart",
            Dialect::Kotlin => "kotlin",
            Dialect::AndroidManifest => "android_manifest",
        }
    }

    /// Whether this dialect is parsed with a tree-sitter grammar
    pub fn uses_grammar(&self) -> bool {
        matches!(self, Dialect::JavaScript | Dialect::TypeScript)
    }
}

/// Get tree-sitter language parser for a grammar-driven dialect
pub fn get_tree_sitter_language(dialect: Dialect) -> ExtractResult<tree_sitter::Language> {
    match dialect {
        Dialect::JavaScript => Ok(tree_sitter_javascript::LANGUAGE.into()),
        // TSX is a superset of TS; one grammar covers both extensions
        Dialect::TypeScript => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        Dialect::Dart | Dialect::Kotlin | Dialect::AndroidManifest => Err(ExtractError::Grammar {
            language: dialect.name().to_string(),
            message: "no grammar is used for this dialect".to_string(),
        }),
    }
}

/// Detect dialect from file extension
///
/// Manifest detection needs the filename, see [`detect_dialect`].
pub fn detect_language_from_extension(extension: &str) -> Option<Dialect> {
    match extension {
        "js" | "jsx" | "mjs" | "cjs" => Some(Dialect::JavaScript),
        "ts" | "tsx" | "mts" | "cts" => Some(Dialect::TypeScript),
        "dart" => Some(Dialect::Dart),
        "kt" | "java" => Some(Dialect::Kotlin),
        _ => None,
    }
}

/// Detect dialect from a file path (exact filename for manifests, extension otherwise)
pub fn detect_dialect(file_path: &str) -> Option<Dialect> {
    let path = Path::new(file_path);
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if file_name == MANIFEST_FILE_NAME {
        return Some(Dialect::AndroidManifest);
    }

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    detect_language_from_extension(extension)
}

/// Whether a path belongs to a supported dialect
pub fn is_supported_file(file_path: &str) -> bool {
    detect_dialect(file_path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_dialect("src/app.jsx"), Some(Dialect::JavaScript));
        assert_eq!(detect_dialect("src/app.tsx"), Some(Dialect::TypeScript));
        assert_eq!(detect_dialect("src/app.ts"), Some(Dialect::TypeScript));
        assert_eq!(detect_dialect("lib/main.dart"), Some(Dialect::Dart));
        assert_eq!(detect_dialect("app/Main.kt"), Some(Dialect::Kotlin));
        assert_eq!(detect_dialect("app/Main.java"), Some(Dialect::Kotlin));
    }

    #[test]
    fn test_manifest_needs_exact_filename() {
        assert_eq!(
            detect_dialect("app/src/main/AndroidManifest.xml"),
            Some(Dialect::AndroidManifest)
        );
        assert_eq!(detect_dialect("app/src/main/res/layout.xml"), None);
        assert_eq!(detect_dialect("androidmanifest.xml"), None);
    }

    #[test]
    fn test_unsupported_paths() {
        assert_eq!(detect_dialect("README.md"), None);
        assert_eq!(detect_dialect("Makefile"), None);
        assert!(!is_supported_file("styles.css"));
    }

    #[test]
    fn test_only_ecmascript_dialects_have_grammars() {
        assert!(get_tree_sitter_language(Dialect::JavaScript).is_ok());
        assert!(get_tree_sitter_language(Dialect::TypeScript).is_ok());
        assert!(get_tree_sitter_language(Dialect::Dart).is_err());
        assert!(!Dialect::Kotlin.uses_grammar());
    }
}
