use ax_adapter::dump::dump_node;
use ax_adapter::AxNode;
use tracing::debug;

use crate::markers;
use crate::shape::first_child_with_class;

/// Descend the fixed window-chrome chain to the node hosting web content:
/// root view → non-client frame → native frame → client view, whose second
/// of exactly two children is the content host. Single alternative; any
/// break in the chain is "not found".
pub fn find_web_content_root(window: &AxNode) -> Option<AxNode> {
    let chain = first_child_with_class(window, markers::ROOT_VIEW)
        .and_then(|root| first_child_with_class(&root, markers::NON_CLIENT_VIEW))
        .and_then(|non_client| first_child_with_class(&non_client, markers::NATIVE_FRAME_VIEW))
        .and_then(|frame| first_child_with_class(&frame, markers::CLIENT_VIEW));

    let client = match chain {
        Some(client) => client,
        None => {
            debug!(seen = %dump_node(window, Some(5)), "window chrome chain did not match");
            return None;
        }
    };

    let mut children = client.children();
    if children.len() == 2 {
        Some(children.remove(1))
    } else {
        debug!(
            arity = children.len(),
            "client view does not have exactly two children"
        );
        None
    }
}
