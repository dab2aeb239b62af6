//! XML Serialization
//!
//! Pure, deterministic rendering of [`SvgNode`] trees into indented XML
//! text. Attribute order is exactly the node's stored order.

use crate::ir::{SvgChild, SvgNode};

/// Render one node at the given indentation depth.
pub fn serialize_node(node: &SvgNode, depth: usize) -> String {
    let indent = "  ".repeat(depth);

    let attrs = node
        .attributes
        .iter()
        .map(|attr| format!("{}=\"{}\"", attr.name, escape_xml(&attr.value)))
        .collect::<Vec<_>>()
        .join(" ");

    let open_tag = if attrs.is_empty() {
        format!("<{}", node.tag)
    } else {
        format!("<{} {}", node.tag, attrs)
    };

    if node.children.is_empty() {
        return format!("{}{}/>", indent, open_tag);
    }

    let children = node
        .children
        .iter()
        .map(|child| match child {
            SvgChild::Element(el) => serialize_node(el, depth + 1),
            SvgChild::Text(text) => format!("{}  {}", indent, escape_xml(text)),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}{}>\n{}\n{}</{}>", indent, open_tag, children, indent, node.tag)
}

/// Join every root's serialization with one blank line between roots.
pub fn assemble_document(roots: &[SvgNode]) -> String {
    roots
        .iter()
        .map(|root| serialize_node(root, 0))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Ampersand first, so already-produced entities are not double-escaped.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
