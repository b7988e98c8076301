//! Tree dump used when a matcher misses and we want the shape it saw.

use crate::names::role;
use crate::node::AxNode;

/// Render a subtree one node per line, indentation showing depth.
/// `depth` limits how far down the dump goes; `None` is unbounded.
pub fn dump_node(root: &AxNode, depth: Option<usize>) -> String {
    let mut lines = Vec::new();
    walk(root, 0, 0, depth, &mut lines);
    lines.join("\n")
}

fn walk(node: &AxNode, index: usize, level: usize, depth: Option<usize>, lines: &mut Vec<String>) {
    let pad = "_".repeat(level);
    if node.role() == role::STATIC_TEXT {
        lines.push(format!("{pad} {index} {}", node.text_value()));
    } else {
        lines.push(format!(
            "{pad} {index} <{} {}>",
            node.role(),
            describe(node)
        ));
    }

    if depth.is_some_and(|limit| level == limit) {
        return;
    }
    for (i, child) in node.children().iter().enumerate() {
        walk(child, i, level + 1, depth, lines);
    }
}

fn describe(node: &AxNode) -> String {
    let mut parts = Vec::new();
    let title = node.title();
    if !title.is_empty() {
        parts.push(format!("title={title}"));
    }
    let description = node.description();
    if !description.is_empty() {
        parts.push(format!("desc={description}"));
    }
    let tags = node.class_tags();
    if !tags.is_empty() {
        let joined: Vec<&str> = tags.iter().map(String::as_str).collect();
        parts.push(format!("class={}", joined.join(" ")));
    }
    if let Some(url) = node.url() {
        parts.push(format!("url={url}"));
    }
    parts.join(" ").replace('\n', "")
}
