//! The automation engine: three independent behaviors consuming located
//! anchors and extracted records, each applying at most one external
//! mutation per poll per window, guarded by explicit per-window state.

pub mod approve;
pub mod auto_continue;
pub mod engine;
pub mod notifier;
pub mod notify;
pub mod outcome;
pub mod state;

pub use approve::ApproveFlow;
pub use auto_continue::ContinueFlow;
pub use engine::{FlowToggles, WindowAutomation, WindowReport};
pub use notifier::{NotifyError, Notifier};
pub use notify::NotifyFlow;
pub use outcome::FlowOutcome;
pub use state::{ContinueWatermark, WindowState};
