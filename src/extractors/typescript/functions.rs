//! Function extraction
//!
//! Covers `function` declarations and `const`/`let` bindings whose initializer
//! is a function or arrow function. Plain assignments (`x = () => {}`) and
//! `var` declarations are not symbols.

use super::syntax::is_function_value;
use crate::extractors::base::{BaseExtractor, Symbol};
use tree_sitter::Node;

/// Extract a function declaration
pub(super) fn extract_function(base: &BaseExtractor, name: Option<Node>) -> Option<Symbol> {
    let name = base.get_node_text(&name?);
    (!name.is_empty()).then(|| Symbol::function(name))
}

/// Extract the function-valued declarators of a lexical declaration
pub(super) fn extract_function_bindings(base: &BaseExtractor, declarators: &[Node]) -> Vec<Symbol> {
    declarators
        .iter()
        .filter_map(|declarator| {
            let value = declarator.child_by_field_name("value")?;
            if !is_function_value(&value) {
                return None;
            }
            let name = declarator.child_by_field_name("name")?;
            // Destructuring patterns bind no single name
            if name.kind() != "identifier" {
                return None;
            }
            Some(Symbol::function(base.get_node_text(&name)))
        })
        .collect()
}
