// Base Extractor Types and Traits
//
// Shared by every extractor:
// - types.rs: the output model (Symbol, ImportEdge, FileRecord, ...)
// - registries.rs: fixed vocabularies (HTML tags, widget bases, idioms, components)
// - extractor.rs: the FileExtractor capability and BaseExtractor helpers
// - tree_methods.rs: syntax-tree navigation for grammar-driven extractors

pub mod extractor;
pub mod registries;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::{normalize_path, BaseExtractor, FileExtractor};
pub use types::{FileRecord, ImportEdge, ManifestInfo, PlatformComponent, Symbol, SymbolKind};

pub(crate) use types::non_empty;
