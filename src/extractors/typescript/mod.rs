//! JavaScript/TypeScript symbol extractor (grammar-driven)
//!
//! Parses JS/JSX with the JavaScript grammar and TS/TSX with the TSX grammar,
//! then walks the concrete syntax tree once. The architecture:
//!
//! - **syntax**: closed classification of the node kinds that produce output
//! - **symbols**: the traversal and its per-call [`symbols::VisitContext`]
//! - **functions**: function declarations and function-valued `const`/`let`
//! - **classes**: classes with superclass, methods and fields
//! - **imports_exports**: static imports plus `require`/dynamic `import`
//! - **markup**: JSX element usage and custom element names
//!
//! Malformed input never fails extraction: tree-sitter recovers with `ERROR`
//! nodes and the walk takes whatever well-formed subtrees remain.

mod classes;
mod functions;
mod imports_exports;
mod markup;
mod symbols;
mod syntax;

use crate::error::{ExtractError, ExtractResult};
use crate::extractors::base::{BaseExtractor, FileExtractor, FileRecord};
use crate::language::{get_tree_sitter_language, Dialect};
use tracing::debug;
use tree_sitter::Parser;

/// Grammar-driven extractor for the ECMAScript family
pub struct TypeScriptExtractor {
    dialect: Dialect,
}

impl TypeScriptExtractor {
    /// `Dialect::JavaScript` selects the plain grammar, `Dialect::TypeScript` the typed one
    pub fn new(dialect: Dialect) -> Self {
        debug_assert!(dialect.uses_grammar());
        Self { dialect }
    }
}

impl FileExtractor for TypeScriptExtractor {
    fn language(&self) -> &'static str {
        self.dialect.name()
    }

    fn extract(&self, file_path: &str, content: &str) -> ExtractResult<FileRecord> {
        let mut parser = Parser::new();
        let language = get_tree_sitter_language(self.dialect)?;
        parser
            .set_language(&language)
            .map_err(|e| ExtractError::Grammar {
                language: self.dialect.name().to_string(),
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| ExtractError::Parse(file_path.to_string()))?;

        let base = BaseExtractor::new(self.dialect.name(), file_path, content);
        if base.has_error(&tree.root_node()) {
            debug!("Partial parse for {}; extracting recovered subtrees", base.file_path);
        }

        let ctx = symbols::visit_tree(&base, &tree);
        debug!(
            "Extracted {} symbols, {} imports from {} file: {}",
            ctx.symbols.len(),
            ctx.imports.len(),
            base.language,
            base.file_path
        );

        Ok(ctx.fill(base.record()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{ImportEdge, Symbol, SymbolKind};

    fn extract_ts(code: &str) -> FileRecord {
        TypeScriptExtractor::new(Dialect::TypeScript)
            .extract("src/test.tsx", code)
            .unwrap()
    }

    fn extract_js(code: &str) -> FileRecord {
        TypeScriptExtractor::new(Dialect::JavaScript)
            .extract("src/test.js", code)
            .unwrap()
    }

    fn symbols(record: &FileRecord) -> &[Symbol] {
        record.symbols.as_deref().unwrap_or(&[])
    }

    fn class_names(record: &FileRecord) -> Vec<&str> {
        symbols(record)
            .iter()
            .filter(|s| s.kind == SymbolKind::Class)
            .map(|s| s.name.as_str())
            .collect()
    }

    #[test]
    fn test_class_with_superclass_and_method() {
        let record = extract_js("class Dog extends Cat { bark() {} }");
        let mut expected = Symbol::class("Dog");
        expected.extends = Some("Cat".to_string());
        expected.methods = Some(vec!["bark".to_string()]);
        assert_eq!(symbols(&record), &[expected]);
    }

    #[test]
    fn test_named_import_binds_and_default_import_is_bare() {
        let record = extract_ts(
            r#"
import {useState, useEffect as effect} from "react";
import React from "react";
import * as path from "path";
import "./global.css";
"#,
        );
        assert_eq!(
            record.imports.unwrap(),
            vec![
                ImportEdge::new(
                    "react",
                    vec!["useState".to_string(), "useEffect".to_string()]
                ),
                ImportEdge::bare("react"),
                ImportEdge::bare("path"),
                ImportEdge::bare("./global.css"),
            ]
        );
    }

    #[test]
    fn test_require_calls_merge_with_static_imports() {
        let record = extract_js(
            r#"
import {a} from "./a";
const fs = require("fs");
const lazy = () => import("./lazy");
require(dynamicName);
"#,
        );
        let imports = record.imports.unwrap();
        let sources: Vec<&str> = imports.iter().map(|i| i.source()).collect();
        assert_eq!(sources, vec!["./a", "fs", "./lazy"]);
        assert!(imports[1].bindings().is_none());
        assert!(imports[2].bindings().is_none());
    }

    #[test]
    fn test_function_declarations_and_function_bindings() {
        let record = extract_ts(
            r#"
function top() {}
export function exported() {}
const arrow = () => 1;
let expr = function () {};
const notAFunction = 42;
var legacy = () => 2;
"#,
        );
        let names: Vec<&str> = symbols(&record).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["top", "exported", "arrow", "expr"]);
        assert!(symbols(&record)
            .iter()
            .all(|s| s.kind == SymbolKind::Function && s.methods.is_none()));
    }

    #[test]
    fn test_exported_class_is_not_duplicated() {
        let record = extract_ts("export class Store {}\nexport abstract class Other {}");
        assert_eq!(class_names(&record), vec!["Store", "Other"]);
    }

    #[test]
    fn test_nested_classes_are_flattened_in_document_order() {
        let record = extract_ts(
            r#"
class Outer {
  make() {
    class Inner {
      run() {}
    }
    return new Inner();
  }
}
class Last {}
"#,
        );
        assert_eq!(class_names(&record), vec!["Outer", "Inner", "Last"]);
        let outer = &symbols(&record)[0];
        assert_eq!(outer.methods, Some(vec!["make".to_string()]));
    }

    #[test]
    fn test_typescript_members_and_generic_superclass() {
        let record = extract_ts(
            r#"
abstract class Repo<T> extends Base<T> implements Store {
  private items: T[] = [];
  count = 0;
  abstract find(id: string): T;
  save(item: T) {}
}
"#,
        );
        let repo = &symbols(&record)[0];
        assert_eq!(repo.name, "Repo");
        assert_eq!(repo.extends.as_deref(), Some("Base"));
        assert_eq!(
            repo.properties,
            Some(vec!["items".to_string(), "count".to_string()])
        );
        assert_eq!(
            repo.methods,
            Some(vec!["find".to_string(), "save".to_string()])
        );
    }

    #[test]
    fn test_overloads_and_accessors_list_the_name_once() {
        let record = extract_ts(
            r#"
class Formatter {
  format(value: string): string;
  format(value: number): string;
  format(value: string | number): string { return String(value); }
  get width(): number { return 1; }
  set width(w: number) {}
  reset() {}
}
"#,
        );
        let formatter = &symbols(&record)[0];
        assert_eq!(
            formatter.methods,
            Some(vec![
                "format".to_string(),
                "width".to_string(),
                "reset".to_string()
            ])
        );
    }

    #[test]
    fn test_class_without_members_has_absent_member_lists() {
        let record = extract_js("class Empty {}");
        let empty = &symbols(&record)[0];
        assert!(empty.methods.is_none());
        assert!(empty.properties.is_none());
        assert!(empty.extends.is_none());
    }

    #[test]
    fn test_js_field_definitions_are_properties() {
        let record = extract_js("class Counter { value = 0; static step = 1; inc() {} }");
        let counter = &symbols(&record)[0];
        assert_eq!(
            counter.properties,
            Some(vec!["value".to_string(), "step".to_string()])
        );
        assert_eq!(counter.methods, Some(vec!["inc".to_string()]));
    }

    #[test]
    fn test_markup_usage_filters_standard_tags() {
        let record = extract_ts(
            r#"
export const App = () => (
  <>
    <div className="root">
      <UserCard name="a" />
      <Layout.Header>
        <span>hi</span>
      </Layout.Header>
      <IMG src="x" />
    </div>
  </>
);
"#,
        );
        assert!(record.has_embedded_markup);
        let names: Vec<&str> = record
            .custom_markup_names
            .as_ref()
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(names, vec!["Layout.Header", "UserCard"]);
    }

    #[test]
    fn test_fragment_only_sets_markup_flag() {
        let record = extract_js("const Frag = () => <></>;");
        assert!(record.has_embedded_markup);
        assert!(record.custom_markup_names.is_none());
    }

    #[test]
    fn test_jsx_in_plain_javascript() {
        let record = extract_js("function App() { return <Widget />; }");
        assert!(record.has_embedded_markup);
        assert!(record.custom_markup_names.unwrap().contains("Widget"));
    }

    #[test]
    fn test_malformed_input_keeps_well_formed_parts() {
        let record = extract_ts(
            r#"
import {x} from "./x";
function ok() {}
class Broken extends {
  oops(
"#,
        );
        assert_eq!(record.imports.as_ref().unwrap().len(), 1);
        assert!(symbols(&record).iter().any(|s| s.name == "ok"));
    }

    #[test]
    fn test_empty_file_yields_empty_record() {
        let record = extract_ts("");
        assert!(!record.has_content());
        assert!(!record.has_embedded_markup);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let code = "import {a} from 'a';\nclass A extends B { x = 1; y() {} }\nconst C = () => <Foo/>;";
        let first = serde_json::to_string(&extract_ts(code)).unwrap();
        let second = serde_json::to_string(&extract_ts(code)).unwrap();
        assert_eq!(first, second);
    }
}
