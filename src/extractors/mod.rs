//! Codemap's Language Extractors Module
//!
//! One extractor per dialect, all behind the [`base::FileExtractor`] trait:
//! - `typescript` - grammar-driven JS/TS walk (symbols, imports, JSX usage)
//! - `dart` - regex-driven Flutter widget and state classification
//! - `kotlin` - regex-driven Android component classification (Kotlin and Java)
//! - `manifest` - `AndroidManifest.xml` attribute scraping
//! - `manager` - the stateless dispatcher

pub mod base;
pub mod manager;

pub mod dart;
pub mod kotlin;
pub mod manifest;
pub mod typescript;

// Re-export the public API
pub use base::{
    FileExtractor, FileRecord, ImportEdge, ManifestInfo, PlatformComponent, Symbol, SymbolKind,
};
pub use dart::DartExtractor;
pub use kotlin::KotlinExtractor;
pub use manager::ExtractorManager;
pub use manifest::ManifestExtractor;
pub use typescript::TypeScriptExtractor;
