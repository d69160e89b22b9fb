// BaseExtractor implementation for Codemap
//
// Holds the per-file state every dialect extractor starts from, plus the
// `FileExtractor` capability trait the dispatcher talks to.

use tree_sitter::Node;

use super::types::FileRecord;
use crate::error::ExtractResult;

/// Anything that can turn one file's content into a [`FileRecord`]
///
/// Grammar-driven and regex-driven extractors sit behind the same trait, so a
/// heuristic dialect can later be swapped for a grammar without touching the
/// dispatcher or the aggregator.
pub trait FileExtractor {
    /// Dialect name used in log lines
    fn language(&self) -> &'static str;

    fn extract(&self, file_path: &str, content: &str) -> ExtractResult<FileRecord>;
}

/// Per-file source handle shared by the extractors
pub struct BaseExtractor<'a> {
    pub language: &'static str,
    pub file_path: String,
    pub content: &'a str,
}

impl<'a> BaseExtractor<'a> {
    pub fn new(language: &'static str, file_path: &str, content: &'a str) -> Self {
        Self {
            language,
            file_path: normalize_path(file_path),
            content,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Error-recovery trees can carry ranges past the end on truncated input
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Text of a string literal node without its quotes
    pub fn get_string_literal(&self, node: &Node) -> String {
        self.get_node_text(node)
            .trim_matches(|c| c == '"' || c == '\'' || c == '`')
            .to_string()
    }

    /// Start a record for this file
    pub fn record(&self) -> FileRecord {
        FileRecord::new(self.file_path.clone())
    }
}

/// Forward-slash path as stored in records
pub fn normalize_path(file_path: &str) -> String {
    file_path.replace('\\', "/")
}
