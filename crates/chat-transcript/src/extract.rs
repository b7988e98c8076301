use anchor_locator::markers;
use ax_adapter::dump::dump_node;
use ax_adapter::names::role;
use ax_adapter::AxNode;
use chatpilot_core_types::{MessageRecord, Role};
use tracing::{debug, warn};

use crate::render::render_paragraph;

/// Walk the conversation anchor's direct children in document order and
/// build one record per message. First matching rule wins per child:
/// decorations are skipped, the composer trailer ends the history, and a
/// child no rule covers becomes an `Unknown` record carrying its
/// flattened text, a soft failure rather than an error.
pub fn extract_messages(conversation_anchor: &AxNode) -> Vec<MessageRecord> {
    let mut records = Vec::new();

    for (index, message) in conversation_anchor.children().iter().enumerate() {
        if message.role().is_empty() {
            debug!(index, "skipping no-role element");
            continue;
        }
        if message.has_class(markers::THUMBNAIL) {
            debug!(index, "skipping thumbnail");
            continue;
        }
        if message.has_class(markers::POINTER_DECORATION) {
            continue;
        }
        if message.has_class(markers::COMPOSER_TRAILER) {
            debug!(index, "reached composer trailer, end of history");
            break;
        }

        if let Some(record) = assistant_record(message, index) {
            records.push(record);
        } else if let Some(record) = user_record(message) {
            records.push(record);
        } else {
            warn!(index, shape = %dump_node(message, Some(2)), "unrecognized message");
            records.push(MessageRecord::new(
                Role::Unknown,
                vec![message.flattened_text()],
            ));
        }
    }

    records
}

/// A message group with an assistant-content child: paragraphs come from
/// that child, stopping at the first "absolute" overlay sibling.
fn assistant_record(message: &AxNode, index: usize) -> Option<MessageRecord> {
    if !message.has_class(markers::MESSAGE_GROUP) {
        return None;
    }
    let inner = message
        .children()
        .into_iter()
        .find(|child| child.has_class(markers::ASSISTANT_CONTENT))?;

    let content = paragraph_blocks(&inner.children());
    let truncated = hit_max_length(message);
    if truncated {
        debug!(index, "assistant message hit the reply size limit");
    }
    Some(MessageRecord {
        role: Role::Assistant,
        content,
        truncated,
    })
}

/// The truncation trailer: the message's last child holds exactly one
/// static-text leaf carrying the notice.
fn hit_max_length(message: &AxNode) -> bool {
    let Some(last) = message.children().into_iter().last() else {
        return false;
    };
    let mut children = last.children();
    if children.len() != 1 {
        return false;
    }
    let leaf = children.remove(0);
    leaf.role() == role::STATIC_TEXT
        && leaf.text_value().contains(markers::TRUNCATION_NOTICE)
}

/// User messages lead with a plain text leaf; the group tag sits either
/// on the message node itself or on a single wrapping ancestor.
/// Captured trees exhibit both shapes, so both alternatives stay.
fn user_record(message: &AxNode) -> Option<MessageRecord> {
    if let Some(record) = user_record_direct(message) {
        return Some(record);
    }
    let mut children = message.children();
    if children.len() == 1 {
        return user_record_direct(&children.remove(0));
    }
    None
}

fn user_record_direct(node: &AxNode) -> Option<MessageRecord> {
    if !node.has_class(markers::MESSAGE_GROUP) {
        return None;
    }
    let children = node.children();
    let (first, rest) = children.split_first()?;
    if first.role() != role::STATIC_TEXT {
        return None;
    }
    Some(MessageRecord::new(Role::User, paragraph_blocks(rest)))
}

/// Render consecutive paragraph nodes, stopping at the first overlay.
fn paragraph_blocks(paragraphs: &[AxNode]) -> Vec<String> {
    let mut blocks = Vec::new();
    for para in paragraphs {
        if para.has_class(markers::MESSAGE_OVERLAY) {
            break;
        }
        blocks.push(render_paragraph(para).join("\n"));
    }
    blocks
}
