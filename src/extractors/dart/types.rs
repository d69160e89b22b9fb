// Dart class scan and widget classification
//
// Everything here except the class header itself is file-scoped: the state
// idiom, annotations and package dependencies found anywhere in the file are
// attached to every class in it.

use super::helpers::{contains_token, push_unique, CLASS_RE, PACKAGE_RE};
use crate::extractors::base::registries::{
    is_widget_base_class, KNOWN_ANNOTATIONS, STATE_MANAGEMENT_PATTERNS,
};
use crate::extractors::base::{non_empty, Symbol};

/// Attributes shared by every class symbol of one file
#[derive(Debug, Default)]
pub(super) struct FileTraits {
    pub(super) state_pattern: Option<String>,
    pub(super) annotations: Vec<String>,
    pub(super) package_dependencies: Vec<String>,
}

/// One `class` header found by the scan
#[derive(Debug)]
pub(super) struct ClassHeader<'a> {
    pub(super) name: &'a str,
    pub(super) superclass: Option<&'a str>,
}

/// Scan all class headers, left to right
pub(super) fn scan_classes(content: &str) -> Vec<ClassHeader<'_>> {
    CLASS_RE
        .captures_iter(content)
        .filter_map(|caps| {
            Some(ClassHeader {
                name: caps.get(1)?.as_str(),
                superclass: caps.get(2).map(|m| m.as_str()),
            })
        })
        .collect()
}

/// Derive the file-scoped traits
pub(super) fn scan_file_traits(content: &str, classes: &[ClassHeader]) -> FileTraits {
    FileTraits {
        state_pattern: detect_state_pattern(content, classes),
        annotations: detect_annotations(content),
        package_dependencies: detect_package_dependencies(content),
    }
}

/// First registered idiom that occurs in the text or is used as a superclass
fn detect_state_pattern(content: &str, classes: &[ClassHeader]) -> Option<String> {
    STATE_MANAGEMENT_PATTERNS
        .iter()
        .find(|idiom| {
            content.contains(*idiom) || classes.iter().any(|c| c.superclass == Some(**idiom))
        })
        .map(|idiom| idiom.to_string())
}

/// Recognised markers present anywhere in the file, registry order
fn detect_annotations(content: &str) -> Vec<String> {
    KNOWN_ANNOTATIONS
        .iter()
        .filter(|marker| contains_token(content, marker))
        .map(|marker| marker.to_string())
        .collect()
}

/// External package identifiers of `package:` paths, first-seen order
fn detect_package_dependencies(content: &str) -> Vec<String> {
    let mut packages = Vec::new();
    for caps in PACKAGE_RE.captures_iter(content) {
        push_unique(&mut packages, &caps[1]);
    }
    packages
}

/// Build the symbol for one class
pub(super) fn build_class_symbol(content: &str, header: &ClassHeader, traits: &FileTraits) -> Symbol {
    let mut symbol = Symbol::class(header.name);
    symbol.extends = header.superclass.map(str::to_string);

    // Literal header checks decide stateful/stateless on their own; the registry
    // check only feeds `is_widget`.
    let is_stateless = content.contains(&format!("class {} extends StatelessWidget", header.name));
    let is_stateful = content.contains(&format!("class {} extends StatefulWidget", header.name));
    let in_registry = header.superclass.is_some_and(is_widget_base_class);

    symbol.is_widget = Some(in_registry || is_stateless || is_stateful);
    symbol.is_stateless = Some(is_stateless);
    symbol.is_stateful = Some(is_stateful);

    symbol.state_management_pattern = traits.state_pattern.clone();
    symbol.annotations = non_empty(traits.annotations.clone());
    symbol.package_dependencies = non_empty(traits.package_dependencies.clone());
    symbol
}
