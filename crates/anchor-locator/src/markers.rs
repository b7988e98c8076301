//! The host chat application's structural conventions: class tags, title
//! prefixes and control descriptions the matchers and extractor key on.
//! These are deliberately specific to one application; tolerating layout
//! drift is the job of the shape alternatives, not of looser markers.

/// Window chrome chain down to the web content host.
pub const ROOT_VIEW: &str = "RootView";
pub const NON_CLIENT_VIEW: &str = "NonClientView";
pub const NATIVE_FRAME_VIEW: &str = "NativeFrameViewMac";
pub const CLIENT_VIEW: &str = "ClientView";

/// Layout shell repeated around the conversation container.
pub const WRAPPER: &str = "relative";

/// Sticky input footer at the bottom of the conversation view.
pub const FOOTER_STICKY: &str = "sticky";
pub const FOOTER_PINNED: &str = "bottom-0";

/// Tool-approval dialog chain and controls.
pub const OVERLAY: &str = "min-h-screen";
pub const MODAL_BACKDROP: &str = "bg-black";
pub const DIALOG_TITLE_PREFIX: &str = "Allow tool";
pub const APPROVE_BUTTON_TITLE: &str = "Allow for this chat";

/// Composer (text input) chain.
pub const INPUT_ROUNDED: &str = "rounded-2xl";
pub const INPUT_SCROLL: &str = "overflow-y-auto";
pub const EDITOR: &str = "ProseMirror";
pub const COMPOSER_PLACEHOLDER: &str = "Reply to Claude...\n";

/// Send/stop controls in the footer.
pub const SEND_BUTTON_DESCRIPTION: &str = "Send message";
pub const STOP_BUTTON_DESCRIPTION: &str = "Stop response";

/// Message-list child markers.
pub const THUMBNAIL: &str = "group/thumbnail";
pub const POINTER_DECORATION: &str = "cursor-pointer";
pub const COMPOSER_TRAILER: &str = "p-1";
pub const MESSAGE_GROUP: &str = "group";
pub const ASSISTANT_CONTENT: &str = "font-claude-message";
pub const MESSAGE_OVERLAY: &str = "absolute";
pub const BULLETED_LIST: &str = "list-disc";

/// Trailer text the host appends when a reply hits the size limit.
pub const TRUNCATION_NOTICE: &str = "hit the max length for a message";

/// Chat URL shape: only windows showing one of these are live chats.
pub const CHAT_URL_HOST: &str = "claude.ai";
pub const CHAT_URL_PATH_PREFIX: &str = "/chat/";
