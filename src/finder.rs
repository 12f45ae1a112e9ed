//! Incremental search engine
//!
//! Drives the jump-navigation search loop: a live query narrowed one
//! keystroke at a time, two-layer match highlighting, and the handoff of
//! the match set to the tagging collaborator.

pub mod editor;
pub mod highlight;
pub mod scanner;
pub mod session;
pub mod spec;
pub mod trigger;

pub use editor::{EditorOps, HighlightId, HighlightLayer, Tagger};
pub use highlight::{HighlightManager, ViewMark};
pub use session::{Session, DEFAULT_SKIM_DELAY, SINGLE_TAG_LIMIT};
pub use spec::{Matcher, SearchSpec};
pub use trigger::Trigger;
