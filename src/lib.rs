// Codemap Core - symbol map extraction for mixed JS/TS, Flutter and Android trees
//
// Architecture: per-file extractors produce FileRecords, the aggregator folds
// them into one ProjectReport, and the scan driver ties both to a directory walk.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod extractors;
pub mod language;
pub mod scan;
pub mod utils;

pub use aggregator::{Aggregator, ProjectReport};
pub use config::ScanConfig;
pub use error::{ExtractError, ExtractResult};
pub use extractors::{
    ExtractorManager, FileExtractor, FileRecord, ImportEdge, ManifestInfo, PlatformComponent,
    Symbol, SymbolKind,
};
pub use language::{detect_dialect, Dialect};
pub use scan::{scan_project, FileFailure, ScanOutcome};
