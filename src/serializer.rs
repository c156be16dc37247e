/// Stringify: the inverse of tokenization for the name/alias portion.
use crate::node::WikiLinkNode;

/// Reconstruct the canonical bracketed form of a node: `[[name]]`, or
/// `[[name<divider>alias]]` when the display alias differs from the name.
///
/// The embed marker and media rendering details are derived at tokenize time,
/// not stored, so an embed node serializes back to its plain link form. This
/// round-trip loss is a known limitation, not an oversight.
pub fn serialize(node: &WikiLinkNode, divider: char) -> String {
    if node.display_alias == node.raw_name {
        return format!("[[{}]]", node.raw_name);
    }
    return format!("[[{}{divider}{}]]", node.raw_name, node.display_alias);
}
