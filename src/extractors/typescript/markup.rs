//! Embedded markup (JSX/TSX) usage

use crate::extractors::base::registries::is_known_html_tag;
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Custom element name for an opening or self-closing tag
///
/// Returns `None` for fragments and for standard host elements.
pub(super) fn custom_tag_name(base: &BaseExtractor, name: Option<Node>) -> Option<String> {
    let tag = base.get_node_text(&name?);
    if tag.is_empty() || is_known_html_tag(&tag) {
        None
    } else {
        Some(tag)
    }
}
