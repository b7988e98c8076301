//! Replay backend: answers the port operations from a serialized tree.
//!
//! A recording is a JSON document of nested nodes:
//!
//! ```json
//! { "windows": [ { "role": "AXWindow", "classes": ["RootView"],
//!                  "children": [ ... ] } ] }
//! ```
//!
//! Reads are deterministic; writes land in an in-memory overlay and every
//! mutation is journaled so tests can assert exactly what an automation
//! did (or, in dry-run, that it did nothing).

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Deserialize;

use crate::error::AxError;
use crate::names::attr;
use crate::node::AxNode;
use crate::port::{AxTreeAccess, AxValue, NodeId};

#[derive(Debug, Deserialize)]
pub struct NodeSpec {
    pub role: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

#[derive(Debug, Deserialize)]
pub struct TreeSpec {
    pub windows: Vec<NodeSpec>,
}

struct RecordedNode {
    role: String,
    title: Option<String>,
    description: Option<String>,
    value: Option<String>,
    url: Option<String>,
    classes: Vec<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// One entry in the mutation journal, in the order it happened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mutation {
    SetValue { node: NodeId, text: String },
    Action { node: NodeId, action: String },
}

pub struct RecordedTree {
    nodes: Vec<RecordedNode>,
    windows: Vec<NodeId>,
    /// Overlay for values written through the port after load.
    overrides: Mutex<HashMap<NodeId, String>>,
    journal: Mutex<Vec<Mutation>>,
    deny_mutations: AtomicBool,
}

impl RecordedTree {
    pub fn load(path: &Path) -> Result<Self, AxError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| AxError::snapshot(format!("read {}: {err}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AxError> {
        let spec: TreeSpec =
            serde_json::from_str(raw).map_err(|err| AxError::snapshot(err.to_string()))?;
        Ok(Self::from_spec(spec))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, AxError> {
        let spec: TreeSpec =
            serde_json::from_value(value).map_err(|err| AxError::snapshot(err.to_string()))?;
        Ok(Self::from_spec(spec))
    }

    pub fn from_spec(spec: TreeSpec) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            windows: Vec::new(),
            overrides: Mutex::new(HashMap::new()),
            journal: Mutex::new(Vec::new()),
            deny_mutations: AtomicBool::new(false),
        };
        for window in spec.windows {
            let id = tree.insert(window, None);
            tree.windows.push(id);
        }
        tree
    }

    fn insert(&mut self, spec: NodeSpec, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(RecordedNode {
            role: spec.role,
            title: spec.title,
            description: spec.description,
            value: spec.value,
            url: spec.url,
            classes: spec.classes,
            children: Vec::new(),
            parent,
        });
        for child in spec.children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id as usize].children.push(child_id);
        }
        id
    }

    fn node(&self, id: NodeId) -> Result<&RecordedNode, AxError> {
        self.nodes
            .get(id as usize)
            .ok_or_else(|| AxError::host(format!("unknown node id {id}")))
    }

    /// Facade over window `index`, for wiring loops and tests.
    pub fn window_node(self: &Arc<Self>, index: usize) -> Option<AxNode> {
        let id = *self.windows.get(index)?;
        Some(AxNode::new(self.clone() as Arc<dyn AxTreeAccess>, id))
    }

    /// When set, every write and action comes back rejected. Lets tests
    /// drive the action-rejected paths.
    pub fn set_deny_mutations(&self, deny: bool) {
        self.deny_mutations.store(deny, Ordering::SeqCst);
    }

    pub fn journal(&self) -> Vec<Mutation> {
        self.journal.lock().clone()
    }

    pub fn clear_journal(&self) {
        self.journal.lock().clear();
    }
}

impl AxTreeAccess for RecordedTree {
    fn windows(&self) -> Vec<NodeId> {
        self.windows.clone()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Result<Option<AxValue>, AxError> {
        let record = self.node(node)?;
        let value = match name {
            attr::ROLE => Some(AxValue::Text(record.role.clone())),
            attr::TITLE => record.title.clone().map(AxValue::Text),
            attr::DESCRIPTION => record.description.clone().map(AxValue::Text),
            attr::VALUE => self
                .overrides
                .lock()
                .get(&node)
                .cloned()
                .or_else(|| record.value.clone())
                .map(AxValue::Text),
            attr::URL => record.url.clone().map(AxValue::Text),
            attr::CHILDREN => Some(AxValue::Nodes(record.children.clone())),
            attr::PARENT => record.parent.map(AxValue::Node),
            attr::DOM_CLASS_LIST => {
                if record.classes.is_empty() {
                    None
                } else {
                    Some(AxValue::Tags(record.classes.clone()))
                }
            }
            _ => None,
        };
        Ok(value)
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: AxValue) -> Result<(), AxError> {
        self.node(node)?;
        if self.deny_mutations.load(Ordering::SeqCst) {
            return Err(AxError::WriteRejected {
                attribute: name.to_string(),
                reason: "mutations denied".to_string(),
            });
        }
        if name != attr::VALUE {
            return Err(AxError::WriteRejected {
                attribute: name.to_string(),
                reason: "attribute is not writable".to_string(),
            });
        }
        let text = match value {
            AxValue::Text(text) => text,
            other => {
                return Err(AxError::WriteRejected {
                    attribute: name.to_string(),
                    reason: format!("unsupported payload {other:?}"),
                })
            }
        };
        self.overrides.lock().insert(node, text.clone());
        self.journal.lock().push(Mutation::SetValue { node, text });
        Ok(())
    }

    fn perform_action(&self, node: NodeId, action: &str) -> Result<(), AxError> {
        self.node(node)?;
        if self.deny_mutations.load(Ordering::SeqCst) {
            return Err(AxError::ActionRejected {
                action: action.to_string(),
                reason: "mutations denied".to_string(),
            });
        }
        self.journal.lock().push(Mutation::Action {
            node,
            action: action.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Arc<RecordedTree> {
        Arc::new(
            RecordedTree::from_value(json!({
                "windows": [{
                    "role": "AXWindow",
                    "title": "Chat",
                    "children": [
                        { "role": "AXGroup", "classes": ["relative"], "children": [
                            { "role": "AXStaticText", "value": "hello " },
                            { "role": "AXStaticText", "value": "world" }
                        ]},
                        { "role": "AXButton", "description": "Send message" }
                    ]
                }]
            }))
            .unwrap(),
        )
    }

    #[test]
    fn absent_attribute_is_a_sentinel_not_an_error() {
        let tree = sample();
        let window = tree.window_node(0).unwrap();
        let group = window.children().remove(0);
        // No AXTitle recorded on the group: Ok(None) through the port,
        // default through the facade, error through require().
        assert_eq!(
            tree.attribute(group.id(), attr::TITLE).unwrap(),
            None
        );
        assert_eq!(group.title(), "");
        assert!(matches!(
            group.require(attr::TITLE),
            Err(AxError::AttributeMissing(_))
        ));
    }

    #[test]
    fn unknown_node_is_a_host_error() {
        let tree = sample();
        assert!(matches!(
            tree.attribute(999, attr::ROLE),
            Err(AxError::Host(_))
        ));
    }

    #[test]
    fn children_are_ordered_and_parent_links_back() {
        let tree = sample();
        let window = tree.window_node(0).unwrap();
        let children = window.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].role(), "AXGroup");
        assert_eq!(children[1].description(), "Send message");
        assert_eq!(children[0].parent().unwrap().id(), window.id());
        assert!(window.parent().is_none());
    }

    #[test]
    fn flattened_text_concatenates_leaves_without_separators() {
        let tree = sample();
        let window = tree.window_node(0).unwrap();
        assert_eq!(window.flattened_text(), "hello world");
    }

    #[test]
    fn find_all_is_preorder_and_includes_self() {
        let tree = sample();
        let window = tree.window_node(0).unwrap();
        let groups = window.find_all(&|n| n.role() == "AXGroup");
        assert_eq!(groups.len(), 1);
        let all = window.find_all(&|_| true);
        assert_eq!(all[0].id(), window.id());
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn writes_overlay_and_journal_in_order() {
        let tree = sample();
        let window = tree.window_node(0).unwrap();
        let button = window.children().remove(1);
        let group = window.children().remove(0);

        group.set_text_value("Continue").unwrap();
        button.press().unwrap();

        assert_eq!(group.text_value(), "Continue");
        assert_eq!(
            tree.journal(),
            vec![
                Mutation::SetValue {
                    node: group.id(),
                    text: "Continue".to_string()
                },
                Mutation::Action {
                    node: button.id(),
                    action: "AXPress".to_string()
                },
            ]
        );
    }

    #[test]
    fn denied_mutations_reject_without_journaling() {
        let tree = sample();
        tree.set_deny_mutations(true);
        let window = tree.window_node(0).unwrap();
        let button = window.children().remove(1);
        assert!(matches!(button.press(), Err(AxError::ActionRejected { .. })));
        assert!(matches!(
            button.set_text_value("x"),
            Err(AxError::WriteRejected { .. })
        ));
        assert!(tree.journal().is_empty());
    }
}
