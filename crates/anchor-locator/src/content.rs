use ax_adapter::names::role;
use ax_adapter::AxNode;

use crate::markers;
use crate::shape::{descend_class_chain, first_match, sole_child, Shape};

/// The group that directly contains the message containers.
///
/// The host wraps the same semantic content in a varying number of layout
/// shells across releases, so three alternatives of decreasing nesting
/// depth are tried in order.
pub fn find_conversation_anchor(content_root: &AxNode) -> Option<AxNode> {
    const SHAPES: &[Shape] = &[
        Shape {
            name: "sole-child/wrapper x3",
            extract: |root| {
                let inner = sole_child(root)?;
                descend_class_chain(&inner, markers::WRAPPER, 3)
            },
        },
        Shape {
            name: "sole-child/wrapper x2",
            extract: |root| {
                let inner = sole_child(root)?;
                descend_class_chain(&inner, markers::WRAPPER, 2)
            },
        },
        Shape {
            name: "wrapper x2",
            extract: |root| descend_class_chain(root, markers::WRAPPER, 2),
        },
    ];
    first_match(content_root, SHAPES, "conversation", 3)
}

/// First direct child of the conversation anchor pinned to the bottom of
/// the view: the input area holding the text box and send/stop controls.
pub fn find_sticky_footer(conversation_anchor: &AxNode) -> Option<AxNode> {
    conversation_anchor.children().into_iter().find(|child| {
        child.role() == role::GROUP
            && child.has_class(markers::FOOTER_STICKY)
            && child.has_class(markers::FOOTER_PINNED)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ax_adapter::RecordedTree;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn anchor_group() -> Value {
        json!({
            "role": "AXGroup", "classes": ["relative"],
            "children": [
                { "role": "AXGroup", "classes": ["group"], "title": "messages" },
                { "role": "AXGroup", "classes": ["sticky", "bottom-0"], "title": "footer" }
            ]
        })
    }

    fn tree_with_content(content: Value) -> Arc<RecordedTree> {
        Arc::new(
            RecordedTree::from_value(json!({ "windows": [content] })).unwrap(),
        )
    }

    fn web_area(children: Vec<Value>) -> Value {
        json!({ "role": "AXWebArea", "children": children })
    }

    fn wrapper(child: Value) -> Value {
        json!({ "role": "AXGroup", "classes": ["relative"], "children": [child] })
    }

    #[test]
    fn deepest_nesting_alternative_wins() {
        // sole child, then three "relative" levels down to the anchor.
        let content = web_area(vec![json!({
            "role": "AXGroup",
            "children": [wrapper(wrapper(anchor_group()))]
        })]);
        let tree = tree_with_content(content);
        let root = tree.window_node(0).unwrap();
        let anchor = find_conversation_anchor(&root).unwrap();
        assert_eq!(anchor.children().len(), 2);
        assert!(find_sticky_footer(&anchor).is_some());
    }

    #[test]
    fn two_level_alternative_matches_when_a_shell_is_removed() {
        let content = web_area(vec![json!({
            "role": "AXGroup",
            "children": [wrapper(anchor_group())]
        })]);
        let tree = tree_with_content(content);
        let root = tree.window_node(0).unwrap();
        assert!(find_conversation_anchor(&root).is_some());
    }

    #[test]
    fn shallowest_alternative_matches_without_the_sole_child_shell() {
        // Two children on the web area, so the sole-child alternatives
        // miss; the direct wrapper-x2 shape still finds the anchor.
        let content = web_area(vec![
            wrapper(anchor_group()),
            json!({ "role": "AXGroup", "title": "sidebar" }),
        ]);
        let tree = tree_with_content(content);
        let root = tree.window_node(0).unwrap();
        assert!(find_conversation_anchor(&root).is_some());
    }

    #[test]
    fn no_shape_is_a_clean_miss() {
        let tree = tree_with_content(web_area(vec![json!({ "role": "AXGroup" })]));
        let root = tree.window_node(0).unwrap();
        assert!(find_conversation_anchor(&root).is_none());
    }

    #[test]
    fn first_wrapper_in_document_order_wins_the_tie() {
        // Two "relative" children at the first level: the matcher must
        // take the first, whose subtree carries the real anchor.
        let content = web_area(vec![json!({
            "role": "AXGroup",
            "children": [
                wrapper(wrapper(anchor_group())),
                { "role": "AXGroup", "classes": ["relative"], "title": "decoy" }
            ]
        })]);
        let tree = tree_with_content(content);
        let root = tree.window_node(0).unwrap();
        let anchor = find_conversation_anchor(&root).unwrap();
        assert!(find_sticky_footer(&anchor).is_some());
    }

    #[test]
    fn footer_requires_both_markers() {
        let tree = tree_with_content(json!({
            "role": "AXGroup",
            "children": [
                { "role": "AXGroup", "classes": ["sticky"] },
                { "role": "AXGroup", "classes": ["sticky", "bottom-0"], "title": "footer" }
            ]
        }));
        let anchor = tree.window_node(0).unwrap();
        let footer = find_sticky_footer(&anchor).unwrap();
        assert_eq!(footer.title(), "footer");
    }
}
