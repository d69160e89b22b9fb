// Dart helper patterns
//
// Static regexes compiled once, shared by the class and import scans.

use regex::Regex;
use std::sync::LazyLock;

/// `class Name<...> extends Super<...> with M implements I`; one match per class header.
/// Type parameters may nest one level (`<A extends Comparable<A>>`).
pub(super) static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bclass\s+([A-Za-z_$][\w$]*)(?:\s*<(?:[^<>{]|<[^<>{]*>)*>)?(?:\s+extends\s+([A-Za-z_$][\w$]*))?",
    )
    .unwrap()
});

/// Quoted import paths: `import 'package:x/y.dart'`
pub(super) static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bimport\s+['"]([^'"]+)['"]"#).unwrap());

/// External package references anywhere in the file: `'package:name/...'`
pub(super) static PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]package:([A-Za-z_][\w]*)/"#).unwrap());

/// `testWidgets(` invocations
pub(super) static WIDGET_TEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btestWidgets\s*\(").unwrap());

/// Harness type passed to widget tests
pub(super) const WIDGET_TESTER_TYPE: &str = "WidgetTester";

/// Path suffixes that mark a Dart test file
pub(super) const TEST_FILE_SUFFIXES: &[&str] = &["_test.dart", ".test.dart"];

/// Import prefix of the widget framework itself
pub(super) const FLUTTER_IMPORT_PREFIX: &str = "package:flutter/";

/// Whether `text` contains `token` not followed by another identifier character
pub(super) fn contains_token(text: &str, token: &str) -> bool {
    text.match_indices(token).any(|(start, _)| {
        text[start + token.len()..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
    })
}

/// Push `item` unless already present
pub(super) fn push_unique(items: &mut Vec<String>, item: &str) {
    if !items.iter().any(|existing| existing == item) {
        items.push(item.to_string());
    }
}
