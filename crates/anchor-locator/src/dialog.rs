use ax_adapter::names::role;
use ax_adapter::AxNode;
use tracing::debug;

use crate::markers;

/// Tool-approval dialog: full-screen overlay group → modal backdrop group
/// → dialog group whose title starts with the fixed prefix. Fixed
/// three-level chain under the web content root, first candidate in
/// document order at every level.
pub fn find_tool_approval_dialog(web_content_root: &AxNode) -> Option<AxNode> {
    if web_content_root.role() != role::WEB_AREA {
        debug!(role = %web_content_root.role(), "content root is not a web area");
        return None;
    }
    for overlay in web_content_root.children() {
        if overlay.role() != role::GROUP || !overlay.has_class(markers::OVERLAY) {
            continue;
        }
        for backdrop in overlay.children() {
            if backdrop.role() != role::GROUP || !backdrop.has_class(markers::MODAL_BACKDROP) {
                continue;
            }
            for dialog in backdrop.children() {
                if dialog.role() == role::GROUP
                    && dialog.title().starts_with(markers::DIALOG_TITLE_PREFIX)
                {
                    debug!(title = %dialog.title(), "found tool approval dialog");
                    return Some(dialog);
                }
            }
        }
    }
    None
}
