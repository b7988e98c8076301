use ax_adapter::names::role;
use ax_adapter::AxNode;

use crate::markers;
use crate::shape::{bounded_button_by_description, first_child_with_class};

/// Depth budget for the send-button search: the button sits a few nested
/// groups into the footer, and a bounded walk keeps the cost proportional
/// to the footer subtree rather than the whole window.
const FOOTER_SEARCH_DEPTH: usize = 5;

/// Editable text box inside the sticky footer, at the end of a fixed
/// chain of class-tagged groups.
pub fn find_text_input(sticky_footer: &AxNode) -> Option<AxNode> {
    sticky_footer
        .children()
        .into_iter()
        .filter(|child| child.role() == role::GROUP)
        .find_map(|container| {
            let rounded = first_child_with_class(&container, markers::INPUT_ROUNDED)?;
            let wrapper = first_child_with_class(&rounded, markers::WRAPPER)?;
            let scroll = first_child_with_class(&wrapper, markers::INPUT_SCROLL)?;
            scroll.children().into_iter().find(|node| {
                node.role() == role::TEXT_AREA && node.has_class(markers::EDITOR)
            })
        })
}

pub fn find_send_button(sticky_footer: &AxNode) -> Option<AxNode> {
    bounded_button_by_description(
        sticky_footer,
        FOOTER_SEARCH_DEPTH,
        markers::SEND_BUTTON_DESCRIPTION,
    )
}

/// Stop button inside the footer's first nested button group. Its
/// presence is the definition of "a response is streaming".
pub fn find_stop_button(sticky_footer: &AxNode) -> Option<AxNode> {
    let input_container = sticky_footer
        .children()
        .into_iter()
        .next()
        .filter(|node| node.role() == role::GROUP)?;
    let button_group = input_container
        .children()
        .into_iter()
        .next()
        .filter(|node| node.role() == role::GROUP)?;
    button_group.children().into_iter().find(|node| {
        node.role() == role::BUTTON && node.description() == markers::STOP_BUTTON_DESCRIPTION
    })
}
