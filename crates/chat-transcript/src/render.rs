use anchor_locator::markers;
use ax_adapter::names::role;
use ax_adapter::AxNode;
use tracing::{debug, warn};

/// Render one paragraph node into lines. Generic containers flatten to a
/// single text line; lists render each item behind a bullet or ordinal
/// leader, continuation lines indented to the leader's width; a button is
/// an invoked tool call and flattens to its visible text.
pub fn render_paragraph(para: &AxNode) -> Vec<String> {
    let para_role = para.role();
    match para_role.as_str() {
        role::GROUP => vec![para.flattened_text()],
        role::LIST => render_list(para),
        role::BUTTON => vec![para.flattened_text()],
        "" => {
            debug!("skipping no-role paragraph");
            Vec::new()
        }
        other => {
            warn!(role = other, "unrecognized paragraph role");
            vec![para.flattened_text()]
        }
    }
}

fn render_list(list: &AxNode) -> Vec<String> {
    let bulleted = list.has_class(markers::BULLETED_LIST);
    let mut lines = Vec::new();
    for (index, item) in list.children().iter().enumerate() {
        let mut rendered = render_paragraph(item);
        if rendered.is_empty() {
            // Still emit an empty bullet for an empty item.
            rendered.push(String::new());
        }
        let leader = if bulleted {
            "* ".to_string()
        } else {
            format!("{}. ", index + 1)
        };
        let indent = " ".repeat(leader.len());
        lines.push(format!("{leader}{}", rendered[0].trim()));
        lines.extend(
            rendered[1..]
                .iter()
                .map(|line| format!("{indent}{}", line.trim())),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ax_adapter::RecordedTree;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn node_of(value: Value) -> (Arc<RecordedTree>, AxNode) {
        let tree = Arc::new(
            RecordedTree::from_value(json!({ "windows": [value] })).unwrap(),
        );
        let node = tree.window_node(0).unwrap();
        (tree, node)
    }

    fn text(value: &str) -> Value {
        json!({ "role": "AXStaticText", "value": value })
    }

    fn item(children: Vec<Value>) -> Value {
        json!({ "role": "AXGroup", "children": children })
    }

    #[test]
    fn bulleted_list_renders_star_leaders() {
        let (_tree, list) = node_of(json!({
            "role": "AXList", "classes": ["list-disc"],
            "children": [item(vec![text("a")]), item(vec![text("b")])]
        }));
        assert_eq!(render_paragraph(&list), vec!["* a", "* b"]);
    }

    #[test]
    fn ordered_list_renders_ordinal_leaders() {
        let (_tree, list) = node_of(json!({
            "role": "AXList",
            "children": [item(vec![text("a")]), item(vec![text("b")])]
        }));
        assert_eq!(render_paragraph(&list), vec!["1. a", "2. b"]);
    }

    #[test]
    fn nested_list_continuation_lines_align_under_the_leader() {
        // An item that is itself a list renders as multiple lines; the
        // follow-on lines indent to the width of the outer leader.
        let inner = json!({
            "role": "AXList", "classes": ["list-disc"],
            "children": [item(vec![text("x")]), item(vec![text("y")])]
        });
        let (_tree, list) = node_of(json!({
            "role": "AXList",
            "children": [inner, item(vec![text("z")])]
        }));
        assert_eq!(
            render_paragraph(&list),
            vec!["1. * x", "   * y", "2. z"]
        );
    }

    #[test]
    fn empty_item_still_gets_a_bullet() {
        let (_tree, list) = node_of(json!({
            "role": "AXList", "classes": ["list-disc"],
            "children": [json!({ "role": "" })]
        }));
        assert_eq!(render_paragraph(&list), vec!["* "]);
    }

    #[test]
    fn tool_call_button_flattens_to_its_text() {
        let (_tree, button) = node_of(json!({
            "role": "AXButton", "children": [text("View result from search")]
        }));
        assert_eq!(render_paragraph(&button), vec!["View result from search"]);
    }

    #[test]
    fn unrecognized_role_falls_back_to_flattened_text() {
        let (_tree, node) = node_of(json!({
            "role": "AXImage", "children": [text("alt")]
        }));
        assert_eq!(render_paragraph(&node), vec!["alt"]);
    }
}
