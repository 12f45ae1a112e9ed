//! Tagging collaborator
//!
//! A reference implementation of the engine's tagging contract: label each
//! candidate with a single letter, jump outright when only one candidate
//! remains, and interpret a trailing label character as target selection.
//! The engine itself only depends on the `Tagger` trait.

mod engine;

pub use engine::{TagEngine, TagMark};
