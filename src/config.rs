//! Configuration
//!
//! TOML config loaded from the platform config directory; every field has
//! a default so a missing or partial file just works.

mod loader;
mod types;

pub use loader::{config_path, load, load_from};
pub use types::{Config, SearchConfig, UiConfig};
