use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::AxError;
use crate::names::{action, attr, role};
use crate::port::{AxTreeAccess, AxValue, NodeId};

/// Facade over one externally-owned tree node.
///
/// Reads that are legitimately absent fall back to a neutral default;
/// reads the caller asserts must exist go through [`AxNode::require`] and
/// surface [`AxError::AttributeMissing`]. Host-API failures on default
/// reads are logged and degrade to the same default, so a mid-mutation
/// tree never unwinds a poll.
#[derive(Clone)]
pub struct AxNode {
    port: Arc<dyn AxTreeAccess>,
    id: NodeId,
}

impl AxNode {
    pub fn new(port: Arc<dyn AxTreeAccess>, id: NodeId) -> Self {
        Self { port, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    fn get(&self, name: &str) -> Option<AxValue> {
        match self.port.attribute(self.id, name) {
            Ok(value) => value,
            Err(err) => {
                debug!(node = self.id, attribute = name, %err, "attribute read failed");
                None
            }
        }
    }

    /// Read an attribute the caller requires to exist.
    pub fn require(&self, name: &str) -> Result<AxValue, AxError> {
        self.port
            .attribute(self.id, name)?
            .ok_or_else(|| AxError::AttributeMissing(name.to_string()))
    }

    pub fn role(&self) -> String {
        self.get(attr::ROLE)
            .and_then(AxValue::into_text)
            .unwrap_or_default()
    }

    pub fn title(&self) -> String {
        self.get(attr::TITLE)
            .and_then(AxValue::into_text)
            .unwrap_or_default()
    }

    pub fn description(&self) -> String {
        self.get(attr::DESCRIPTION)
            .and_then(AxValue::into_text)
            .unwrap_or_default()
    }

    pub fn text_value(&self) -> String {
        self.get(attr::VALUE)
            .and_then(AxValue::into_text)
            .unwrap_or_default()
    }

    pub fn url(&self) -> Option<String> {
        self.get(attr::URL).and_then(AxValue::into_text)
    }

    pub fn class_tags(&self) -> BTreeSet<String> {
        self.get(attr::DOM_CLASS_LIST)
            .and_then(AxValue::into_tags)
            .map(|tags| tags.into_iter().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, tag: &str) -> bool {
        self.class_tags().contains(tag)
    }

    pub fn children(&self) -> Vec<AxNode> {
        self.get(attr::CHILDREN)
            .and_then(AxValue::into_nodes)
            .map(|ids| {
                ids.into_iter()
                    .map(|id| AxNode::new(self.port.clone(), id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn parent(&self) -> Option<AxNode> {
        self.get(attr::PARENT)
            .and_then(AxValue::into_node)
            .map(|id| AxNode::new(self.port.clone(), id))
    }

    /// Pre-order traversal, unbounded depth, the node itself included.
    pub fn find_all(&self, pred: &dyn Fn(&AxNode) -> bool) -> Vec<AxNode> {
        let mut found = Vec::new();
        self.visit(&mut |node| {
            if pred(node) {
                found.push(node.clone());
            }
        });
        found
    }

    fn visit(&self, f: &mut dyn FnMut(&AxNode)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// Concatenation of every static-text leaf underneath, no separators.
    /// Diagnostics and the unknown-message fallback only.
    pub fn flattened_text(&self) -> String {
        let mut out = String::new();
        self.visit(&mut |node| {
            if node.role() == role::STATIC_TEXT {
                out.push_str(&node.text_value());
            }
        });
        out
    }

    pub fn set_text_value(&self, text: &str) -> Result<(), AxError> {
        self.port
            .set_attribute(self.id, attr::VALUE, AxValue::Text(text.to_string()))
    }

    /// Invoke the node's default action.
    pub fn press(&self) -> Result<(), AxError> {
        self.port.perform_action(self.id, action::PRESS)
    }
}

impl fmt::Debug for AxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::dump::dump_node(self, Some(0)))
    }
}
