//! Import extraction
//!
//! Static imports, TS `import x = require("y")`, CommonJS `require("x")` and
//! dynamic `import("x")` all land in one ordered list of [`ImportEdge`]s.
//! Only named bindings (`{ a, b as c }`) are recorded; default and namespace
//! bindings leave the edge bare.

use crate::extractors::base::{BaseExtractor, ImportEdge};
use tree_sitter::Node;

/// Extract an import statement
pub(super) fn extract_import(
    base: &BaseExtractor,
    source: Option<Node>,
    clause: Option<Node>,
    require_clause: Option<Node>,
) -> Option<ImportEdge> {
    let source = source.or_else(|| require_clause?.child_by_field_name("source"))?;
    let source = base.get_string_literal(&source);
    if source.is_empty() {
        return None;
    }

    let bindings = clause
        .map(|clause| named_bindings(base, clause))
        .unwrap_or_default();

    Some(ImportEdge::new(source, bindings))
}

/// Imported names from the `named_imports` part of an import clause
fn named_bindings(base: &BaseExtractor, clause: Node) -> Vec<String> {
    let mut bindings = Vec::new();
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        if child.kind() != "named_imports" {
            continue;
        }
        let mut spec_cursor = child.walk();
        for specifier in child.named_children(&mut spec_cursor) {
            if specifier.kind() != "import_specifier" {
                continue;
            }
            if let Some(name) = base.get_field_text(&specifier, "name") {
                bindings.push(name.trim_matches(|c| c == '"' || c == '\'').to_string());
            }
        }
    }
    bindings
}

/// Extract `require("x")` / `import("x")` with a string-literal first argument
pub(super) fn extract_require(
    base: &BaseExtractor,
    function: Option<Node>,
    arguments: Option<Node>,
) -> Option<ImportEdge> {
    let function = function?;
    let is_loader = match function.kind() {
        "identifier" => base.get_node_text(&function) == "require",
        "import" => true,
        _ => false,
    };
    if !is_loader {
        return None;
    }

    let arguments = arguments?;
    let mut cursor = arguments.walk();
    let first = arguments
        .named_children(&mut cursor)
        .find(|arg| arg.kind() != "comment")?;
    if first.kind() != "string" {
        return None;
    }

    let source = base.get_string_literal(&first);
    (!source.is_empty()).then(|| ImportEdge::bare(source))
}
