//! Shape-alternative machinery.
//!
//! A [`Shape`] is one candidate structural pattern: a named predicate plus
//! extractor tried against a scope node. Finders hold an explicit ordered
//! slice of shapes so the fallback chain stays auditable and extensible;
//! the first alternative that matches wins.

use ax_adapter::dump::dump_node;
use ax_adapter::names::role;
use ax_adapter::AxNode;
use tracing::debug;

pub struct Shape {
    pub name: &'static str,
    pub extract: fn(&AxNode) -> Option<AxNode>,
}

/// Evaluate `shapes` in order against `scope`; log which alternative won,
/// or dump the shape we actually saw (to `dump_depth` levels) on a miss.
pub fn first_match(scope: &AxNode, shapes: &[Shape], what: &str, dump_depth: usize) -> Option<AxNode> {
    for shape in shapes {
        if let Some(found) = (shape.extract)(scope) {
            debug!(anchor = what, shape = shape.name, "anchor located");
            return Some(found);
        }
    }
    debug!(
        anchor = what,
        seen = %dump_node(scope, Some(dump_depth)),
        "no shape alternative matched"
    );
    None
}

/// First child (document order) carrying `tag`. When several qualify the
/// first wins: the host puts the active view before decorative siblings.
pub fn first_child_with_class(node: &AxNode, tag: &str) -> Option<AxNode> {
    node.children().into_iter().find(|child| child.has_class(tag))
}

/// The node's only child, if it has exactly one.
pub fn sole_child(node: &AxNode) -> Option<AxNode> {
    let mut children = node.children();
    if children.len() == 1 {
        Some(children.remove(0))
    } else {
        None
    }
}

/// Walk `levels` steps down the repeated wrapper-with-class pattern.
pub fn descend_class_chain(node: &AxNode, tag: &str, levels: usize) -> Option<AxNode> {
    let mut current = node.clone();
    for _ in 0..levels {
        current = first_child_with_class(&current, tag)?;
    }
    Some(current)
}

/// Depth-bounded pre-order search, cheaper than an unbounded scan when the
/// target is known to sit in a narrow subtree.
pub fn bounded_find(
    scope: &AxNode,
    max_depth: usize,
    pred: &dyn Fn(&AxNode) -> bool,
) -> Option<AxNode> {
    if pred(scope) {
        return Some(scope.clone());
    }
    if max_depth == 0 {
        return None;
    }
    for child in scope.children() {
        if let Some(found) = bounded_find(&child, max_depth - 1, pred) {
            return Some(found);
        }
    }
    None
}

/// Button with a given description, searched to a bounded depth.
pub fn bounded_button_by_description(
    scope: &AxNode,
    max_depth: usize,
    description: &str,
) -> Option<AxNode> {
    bounded_find(scope, max_depth, &|node| {
        node.role() == role::BUTTON && node.description() == description
    })
}
