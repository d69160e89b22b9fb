//! Kotlin/Java extractor - platform component classification
//!
//! Regex-driven, like the Dart extractor. Only class headers are read: the
//! superclass decides whether a class is an Activity, Fragment, Service,
//! BroadcastReceiver, ContentProvider or Application. Both header forms are
//! accepted:
//!
//! - Java: `class MainActivity extends AppCompatActivity implements Listener`
//! - Kotlin: `class MainActivity(...) : AppCompatActivity(), Listener`

use crate::error::ExtractResult;
use crate::extractors::base::registries::platform_component_for;
use crate::extractors::base::{non_empty, BaseExtractor, FileExtractor, FileRecord, Symbol};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Group 2 is the Java `extends` target, group 3 the first Kotlin supertype.
// The Kotlin header stays on the class line until `(` or `:`, so a bodiless
// `sealed class Event` never reads the next declaration's supertype.
// Constructor parameters may span lines and nest one level of parentheses.
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bclass\s+([A-Za-z_$][\w$]*)(?:[ \t]*<(?:[^<>{\n]|<[^<>{]*>)*>)?(?:\s+extends\s+([\w$.]+)|[ \t]*(?:[\w@ \t]*\((?:[^()]|\([^()]*\))*\))?[ \t]*:\s*([\w$.]+))?",
    )
    .unwrap()
});

/// Regex-driven extractor for Kotlin and Java sources
#[derive(Debug, Default)]
pub struct KotlinExtractor;

impl KotlinExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FileExtractor for KotlinExtractor {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn extract(&self, file_path: &str, content: &str) -> ExtractResult<FileRecord> {
        let base = BaseExtractor::new(self.language(), file_path, content);
        let mut record = base.record();
        record.is_platform_lang_file = true;

        let symbols: Vec<Symbol> = CLASS_RE
            .captures_iter(content)
            .map(|caps| {
                let mut symbol = Symbol::class(&caps[1]);
                let superclass = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str());
                if let Some(superclass) = superclass {
                    // Registry holds simple names; `android.app.Activity` counts too
                    let simple = superclass.rsplit('.').next().unwrap_or(superclass);
                    symbol.platform_component = platform_component_for(simple);
                    symbol.extends = Some(superclass.to_string());
                }
                symbol
            })
            .collect();

        debug!(
            "Extracted {} classes from platform file: {}",
            symbols.len(),
            base.file_path
        );

        record.symbols = non_empty(symbols);
        Ok(record)
    }
}
