//! Core traversal
//!
//! One pre-order walk over the whole tree. Every node is classified through
//! [`EsNode`] and visited exactly once, in document order. All accumulated
//! output lives in a [`VisitContext`] owned by a single extraction call.

use super::syntax::EsNode;
use super::{classes, functions, imports_exports, markup};
use crate::extractors::base::{non_empty, BaseExtractor, FileRecord, ImportEdge, Symbol};
use std::collections::BTreeSet;
use tree_sitter::{Node, Tree};

/// Output accumulated while walking one file
#[derive(Debug, Default)]
pub(super) struct VisitContext {
    pub(super) symbols: Vec<Symbol>,
    pub(super) imports: Vec<ImportEdge>,
    pub(super) has_markup: bool,
    pub(super) custom_markup: BTreeSet<String>,
}

impl VisitContext {
    /// Move the collected output into `record`, leaving empty fields absent
    pub(super) fn fill(self, mut record: FileRecord) -> FileRecord {
        record.symbols = non_empty(self.symbols);
        record.imports = non_empty(self.imports);
        record.has_embedded_markup = self.has_markup;
        record.custom_markup_names = (!self.custom_markup.is_empty()).then_some(self.custom_markup);
        record
    }
}

/// Walk the tree and collect symbols, imports and markup usage
pub(super) fn visit_tree(base: &BaseExtractor, tree: &Tree) -> VisitContext {
    let mut ctx = VisitContext::default();
    let mut cursor = tree.walk();

    // Iterative pre-order walk; deep minified files would overflow a recursive one
    'walk: loop {
        visit_node(base, cursor.node(), &mut ctx);

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    ctx
}

fn visit_node(base: &BaseExtractor, node: Node, ctx: &mut VisitContext) {
    match EsNode::classify(node) {
        EsNode::FunctionDeclaration { name } => {
            if let Some(symbol) = functions::extract_function(base, name) {
                ctx.symbols.push(symbol);
            }
        }
        EsNode::LexicalDeclaration { declarators } => {
            ctx.symbols
                .extend(functions::extract_function_bindings(base, &declarators));
        }
        EsNode::ExportStatement => {
            // The exported declaration is a child; the walk dispatches it next
        }
        EsNode::ClassDeclaration {
            name,
            heritage,
            body,
        } => {
            ctx.symbols
                .push(classes::extract_class(base, name, heritage, body));
        }
        EsNode::ImportStatement {
            source,
            clause,
            require_clause,
        } => {
            if let Some(edge) = imports_exports::extract_import(base, source, clause, require_clause)
            {
                ctx.imports.push(edge);
            }
        }
        EsNode::CallExpression {
            function,
            arguments,
        } => {
            if let Some(edge) = imports_exports::extract_require(base, function, arguments) {
                ctx.imports.push(edge);
            }
        }
        EsNode::MarkupElement { name } => {
            ctx.has_markup = true;
            if let Some(tag) = markup::custom_tag_name(base, name) {
                ctx.custom_markup.insert(tag);
            }
        }
        EsNode::MarkupFragment => {
            ctx.has_markup = true;
        }
        EsNode::Other => {}
    }
}
