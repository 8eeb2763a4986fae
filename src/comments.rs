// src/comments.rs
//! Leading comment lookup for declarations.

use crate::tsdoc::{self, DocComment};
use crate::unit::SourceUnit;
use tree_sitter::Node;

/// Raw text of the comment leading `node`, if any.
///
/// The leading run is the contiguous sequence of comment siblings directly
/// before the node; the first comment of that run is returned. A `//`
/// comment that shares a line with the end of the previous sibling trails
/// that sibling and is not part of the run. Decorators directly before the
/// node belong to it, so the run is looked for above them.
#[must_use]
pub fn leading_comment<'u>(unit: &'u SourceUnit, node: Node<'u>) -> Option<&'u str> {
    let mut run: Vec<Node<'u>> = Vec::new();
    let mut current = node.prev_sibling();
    while let Some(decorator) = current.filter(|s| s.kind() == "decorator") {
        current = decorator.prev_sibling();
    }

    while let Some(sibling) = current {
        if sibling.kind() != "comment" {
            break;
        }
        run.push(sibling);
        current = sibling.prev_sibling();
    }

    // `current` is now the previous non-comment sibling (if any).
    if let (Some(prev), Some(&earliest)) = (current, run.last()) {
        let trails = earliest.start_position().row == prev.end_position().row
            && unit.node_text(earliest).starts_with("//");
        if trails {
            run.pop();
        }
    }

    run.last().map(|c| unit.node_text(*c))
}

/// Parsed doc comment leading `node`, or `None` when the node has no
/// leading comment at all.
#[must_use]
pub fn doc_comment(unit: &SourceUnit, node: Node<'_>) -> Option<DocComment> {
    leading_comment(unit, node).map(tsdoc::parse)
}
