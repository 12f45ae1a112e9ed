//! TUI host
//!
//! Wires the search session to a concrete buffer pane, key handling, and
//! rendering. The pane owns the decoration store the session draws into.

mod events;
mod pane;
mod render;
mod state;

pub use pane::{EditorPane, PaneHighlight};
pub use state::App;
