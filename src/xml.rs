//! Helpers for navigating and extracting data from registry XML trees.
//!
//! Registry records mix several namespaces, so matching is done on local
//! tag names throughout.

use std::io::{self, Write};

use roxmltree::Node;

/// Get the tag name without namespace prefix.
pub fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Descendant elements with the given local tag name, in document order.
///
/// The starting node itself is included when it matches.
pub fn descendants_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |n| n.is_element() && local_name(*n) == tag)
}

/// First child element with the given local tag name.
pub fn child_named<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && local_name(*n) == tag)
}

/// Trimmed text content of a node, or the empty string.
pub fn element_text(node: Node<'_, '_>) -> String {
    node.text().map(|s| s.trim().to_string()).unwrap_or_default()
}

/// The subtree rooted at `node`, as it appeared in the parse input.
#[must_use]
pub fn subtree_text<'input>(node: Node<'_, 'input>) -> &'input str {
    &node.document().input_text()[node.range()]
}

/// Write the subtree rooted at `node` to a writer.
///
/// Diagnostic helper only; it works for any node kind and emits the node's
/// region of the original input rather than a re-serialization.
pub fn dump<W: Write>(node: Node<'_, '_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", subtree_text(node))
}
