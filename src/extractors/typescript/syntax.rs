//! Closed view over the tree-sitter node kinds the extractor cares about
//!
//! Tree-sitter hands back stringly-typed nodes. Everything the visitor acts on is
//! classified here once into [`EsNode`], so the visitor is an exhaustive `match`
//! and a new node category cannot be silently ignored.

use tree_sitter::Node;

/// Node categories of the JS/TS/TSX grammars that produce output
#[derive(Debug, Clone)]
pub(super) enum EsNode<'t> {
    /// `function foo() {}` and `function* foo() {}`
    FunctionDeclaration { name: Option<Node<'t>> },
    /// `const` / `let` declarations; each declarator may bind a function value
    LexicalDeclaration { declarators: Vec<Node<'t>> },
    /// `export ...`; the wrapped declaration is reached by the normal descent
    ExportStatement,
    /// `class` and TS `abstract class` declarations
    ClassDeclaration {
        name: Option<Node<'t>>,
        heritage: Option<Node<'t>>,
        body: Option<Node<'t>>,
    },
    /// Static `import` statements
    ImportStatement {
        source: Option<Node<'t>>,
        clause: Option<Node<'t>>,
        require_clause: Option<Node<'t>>,
    },
    /// Any call; only `require("x")` and `import("x")` yield output
    CallExpression {
        function: Option<Node<'t>>,
        arguments: Option<Node<'t>>,
    },
    /// Opening or self-closing JSX tag; `name` is `None` for `<>` fragments
    MarkupElement { name: Option<Node<'t>> },
    /// Grammar versions that model `<>...</>` as a dedicated node
    MarkupFragment,
    Other,
}

impl<'t> EsNode<'t> {
    pub(super) fn classify(node: Node<'t>) -> Self {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" => {
                EsNode::FunctionDeclaration {
                    name: node.child_by_field_name("name"),
                }
            }
            "lexical_declaration" => {
                let mut cursor = node.walk();
                let declarators = node
                    .children(&mut cursor)
                    .filter(|child| child.kind() == "variable_declarator")
                    .collect();
                EsNode::LexicalDeclaration { declarators }
            }
            "export_statement" => EsNode::ExportStatement,
            "class_declaration" | "abstract_class_declaration" => {
                let mut cursor = node.walk();
                let heritage = node
                    .children(&mut cursor)
                    .find(|child| child.kind() == "class_heritage");
                EsNode::ClassDeclaration {
                    name: node.child_by_field_name("name"),
                    heritage,
                    body: node.child_by_field_name("body"),
                }
            }
            "import_statement" => {
                let mut cursor = node.walk();
                let mut clause = None;
                let mut require_clause = None;
                for child in node.children(&mut cursor) {
                    match child.kind() {
                        "import_clause" => clause = Some(child),
                        "import_require_clause" => require_clause = Some(child),
                        _ => {}
                    }
                }
                EsNode::ImportStatement {
                    source: node.child_by_field_name("source"),
                    clause,
                    require_clause,
                }
            }
            "call_expression" => EsNode::CallExpression {
                function: node.child_by_field_name("function"),
                arguments: node.child_by_field_name("arguments"),
            },
            "jsx_opening_element" | "jsx_self_closing_element" => EsNode::MarkupElement {
                name: node.child_by_field_name("name"),
            },
            "jsx_fragment" => EsNode::MarkupFragment,
            _ => EsNode::Other,
        }
    }
}

/// Class member categories inside a `class_body`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MemberKind {
    Method,
    Field,
    Other,
}

impl MemberKind {
    pub(super) fn classify(node: &Node) -> Self {
        match node.kind() {
            "method_definition" | "method_signature" | "abstract_method_signature" => {
                MemberKind::Method
            }
            "field_definition" | "public_field_definition" => MemberKind::Field,
            _ => MemberKind::Other,
        }
    }
}

/// Whether a declarator's initializer is a function value
pub(super) fn is_function_value(node: &Node) -> bool {
    matches!(
        node.kind(),
        "arrow_function" | "function_expression" | "function" | "generator_function"
    )
}
