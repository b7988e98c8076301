//! The seam between the automation core and whatever owns the real tree.
//!
//! A backend answers four operations. Reads distinguish three cases the
//! core treats differently: `Ok(Some(_))` value present, `Ok(None)` the
//! attribute is legitimately unset (the explicit not-found sentinel), and
//! `Err(_)` the host service itself failed.

use crate::error::AxError;

/// Backend-scoped handle for one tree node. Handles are only meaningful
/// to the backend that issued them and only for the current poll; anchors
/// are re-derived from the window root every tick.
pub type NodeId = u64;

/// Typed attribute payloads crossing the port.
#[derive(Clone, Debug, PartialEq)]
pub enum AxValue {
    Text(String),
    Tags(Vec<String>),
    Node(NodeId),
    Nodes(Vec<NodeId>),
    Flag(bool),
}

impl AxValue {
    pub fn into_text(self) -> Option<String> {
        match self {
            AxValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_tags(self) -> Option<Vec<String>> {
        match self {
            AxValue::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    pub fn into_node(self) -> Option<NodeId> {
        match self {
            AxValue::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn into_nodes(self) -> Option<Vec<NodeId>> {
        match self {
            AxValue::Nodes(ids) => Some(ids),
            _ => None,
        }
    }
}

pub trait AxTreeAccess: Send + Sync {
    /// Top-level window nodes of the supervised application. Queried once
    /// at loop start; windows opened afterwards need a restart.
    fn windows(&self) -> Vec<NodeId>;

    /// Read one attribute. `Ok(None)` means "not set", which is not an
    /// error; `Err` means the host call itself failed.
    fn attribute(&self, node: NodeId, name: &str) -> Result<Option<AxValue>, AxError>;

    /// Write one attribute; the backend may refuse.
    fn set_attribute(&self, node: NodeId, name: &str, value: AxValue) -> Result<(), AxError>;

    /// Invoke a named action (e.g. a button press); the backend may refuse.
    fn perform_action(&self, node: NodeId, action: &str) -> Result<(), AxError>;
}
