use chatpilot_core_types::ChatUrl;

/// Highest message index already continued for a given chat. Only ever
/// advanced for the same chat; a different chat identifier replaces the
/// watermark outright.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContinueWatermark {
    pub chat: ChatUrl,
    pub index: usize,
}

/// Per-window engine state, exclusively owned by that window's
/// automation for the process lifetime. Passed in explicitly so tests
/// and multiple windows run with independent, inspectable state.
#[derive(Debug, Default)]
pub struct WindowState {
    pub continue_watermark: Option<ContinueWatermark>,
    /// Whether the previous poll saw a streaming response; edges drive
    /// the notify behavior.
    pub running: bool,
}
