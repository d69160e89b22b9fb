// Base Extractor Types for Codemap
//
// All data structures shared by the dialect extractors and the aggregator.
// Field presence follows the compact output schema: optional collections are
// `None` (and skipped on serialization) when nothing was found.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Symbol kinds emitted by the extractors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    Class,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolKind::Function => write!(f, "function"),
            SymbolKind::Class => write!(f, "class"),
        }
    }
}

/// OS-level application building blocks recognised in platform-language classes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlatformComponent {
    Activity,
    Fragment,
    Service,
    BroadcastReceiver,
    ContentProvider,
    Application,
}

impl std::fmt::Display for PlatformComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformComponent::Activity => write!(f, "activity"),
            PlatformComponent::Fragment => write!(f, "fragment"),
            PlatformComponent::Service => write!(f, "service"),
            PlatformComponent::BroadcastReceiver => write!(f, "broadcast_receiver"),
            PlatformComponent::ContentProvider => write!(f, "content_provider"),
            PlatformComponent::Application => write!(f, "application"),
        }
    }
}

/// One declared function or class in a file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Symbol name as it appears in code
    pub name: String,
    pub kind: SymbolKind,
    /// Field names, declaration order (classes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
    /// Method names, declaration order (classes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    /// Single superclass name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_widget: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stateful: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stateless: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_component: Option<PlatformComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_management_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_dependencies: Option<Vec<String>>,
}

impl Symbol {
    /// A function symbol; never carries class-only fields.
    pub fn function(name: impl Into<String>) -> Self {
        Self::bare(name.into(), SymbolKind::Function)
    }

    /// A class symbol with no members or classification yet.
    pub fn class(name: impl Into<String>) -> Self {
        Self::bare(name.into(), SymbolKind::Class)
    }

    fn bare(name: String, kind: SymbolKind) -> Self {
        Self {
            name,
            kind,
            properties: None,
            methods: None,
            extends: None,
            is_widget: None,
            is_stateful: None,
            is_stateless: None,
            platform_component: None,
            state_management_pattern: None,
            annotations: None,
            package_dependencies: None,
        }
    }
}

/// One dependency reference from a file to a module or package
///
/// A reference that binds no named identifiers serializes as a plain string,
/// so consumers can tell `"./styles.css"` apart from `{source, bindings}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ImportEdge {
    Bare(String),
    Named {
        source: String,
        bindings: Vec<String>,
    },
}

impl ImportEdge {
    /// Build an edge, collapsing an empty binding list to a bare source.
    pub fn new(source: impl Into<String>, bindings: Vec<String>) -> Self {
        let source = source.into();
        if bindings.is_empty() {
            ImportEdge::Bare(source)
        } else {
            ImportEdge::Named { source, bindings }
        }
    }

    pub fn bare(source: impl Into<String>) -> Self {
        ImportEdge::Bare(source.into())
    }

    pub fn source(&self) -> &str {
        match self {
            ImportEdge::Bare(source) => source,
            ImportEdge::Named { source, .. } => source,
        }
    }

    pub fn bindings(&self) -> Option<&[String]> {
        match self {
            ImportEdge::Bare(_) => None,
            ImportEdge::Named { bindings, .. } => Some(bindings),
        }
    }
}

/// Package id and declared components scraped from a platform manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<String>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Extraction output for one file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Relative, forward-slash path
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<Symbol>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<Vec<ImportEdge>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_embedded_markup: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_markup_names: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_widget_lang_file: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_widget_framework_file: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_platform_lang_file: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_info: Option<ManifestInfo>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_test_file: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_widget_tests: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_state_pattern: Option<String>,
}

impl FileRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Whether the record carries anything the project report keeps
    pub fn has_content(&self) -> bool {
        self.symbols.as_ref().is_some_and(|s| !s.is_empty())
            || self.imports.as_ref().is_some_and(|i| !i.is_empty())
            || self
                .custom_markup_names
                .as_ref()
                .is_some_and(|n| !n.is_empty())
    }
}

/// Wrap a collection in `Some` only when it has at least one element
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
