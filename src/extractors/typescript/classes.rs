//! Class extraction
//!
//! Members are split into methods and fields by node category. Nested class
//! declarations are not handled here: the visitor reaches them on its own and
//! reports them as sibling symbols.

use super::syntax::MemberKind;
use crate::extractors::base::{non_empty, BaseExtractor, Symbol};
use tree_sitter::Node;

/// Extract a class declaration
pub(super) fn extract_class(
    base: &BaseExtractor,
    name: Option<Node>,
    heritage: Option<Node>,
    body: Option<Node>,
) -> Symbol {
    let name = name
        .map(|n| base.get_node_text(&n))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Anonymous".to_string());

    let mut symbol = Symbol::class(name);
    symbol.extends = heritage.and_then(|h| superclass_name(base, h));

    if let Some(body) = body {
        let (methods, properties) = collect_members(base, body);
        symbol.methods = non_empty(methods);
        symbol.properties = non_empty(properties);
    }

    symbol
}

/// Read the superclass out of a `class_heritage` node
///
/// JS puts the expression directly under the heritage node; TS wraps it in an
/// `extends_clause` whose `value` field excludes type arguments.
fn superclass_name(base: &BaseExtractor, heritage: Node) -> Option<String> {
    let mut cursor = heritage.walk();
    for child in heritage.named_children(&mut cursor) {
        match child.kind() {
            "extends_clause" => return base.get_field_text(&child, "value"),
            "implements_clause" | "comment" => continue,
            _ => {
                let text = base.get_node_text(&child);
                return (!text.is_empty()).then_some(text);
            }
        }
    }
    None
}

fn collect_members(base: &BaseExtractor, body: Node) -> (Vec<String>, Vec<String>) {
    let mut methods = Vec::new();
    let mut properties = Vec::new();

    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        match MemberKind::classify(&member) {
            MemberKind::Method => {
                // Overload signatures and their implementation share one name;
                // accessor pairs (`get x` / `set x`) do too
                if let Some(name) = base.get_field_text(&member, "name") {
                    if !methods.contains(&name) {
                        methods.push(name);
                    }
                }
            }
            MemberKind::Field => {
                // JS names the field `property`, TS names it `name`
                let name = base
                    .get_field_text(&member, "property")
                    .or_else(|| base.get_field_text(&member, "name"));
                if let Some(name) = name {
                    properties.push(name);
                }
            }
            MemberKind::Other => {}
        }
    }

    (methods, properties)
}
