//! Attribute, role and action names spoken by the host accessibility
//! service. Kept in one place so the matchers read as structure, not
//! string soup.

pub mod attr {
    pub const ROLE: &str = "AXRole";
    pub const TITLE: &str = "AXTitle";
    pub const DESCRIPTION: &str = "AXDescription";
    pub const VALUE: &str = "AXValue";
    pub const URL: &str = "AXURL";
    pub const CHILDREN: &str = "AXChildren";
    pub const PARENT: &str = "AXParent";
    pub const DOM_CLASS_LIST: &str = "AXDOMClassList";
}

pub mod role {
    pub const WINDOW: &str = "AXWindow";
    pub const WEB_AREA: &str = "AXWebArea";
    pub const GROUP: &str = "AXGroup";
    pub const STATIC_TEXT: &str = "AXStaticText";
    pub const TEXT_AREA: &str = "AXTextArea";
    pub const BUTTON: &str = "AXButton";
    pub const LIST: &str = "AXList";
}

pub mod action {
    pub const PRESS: &str = "AXPress";
}
