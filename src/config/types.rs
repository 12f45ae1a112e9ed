// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

/// Search tuning section
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SearchConfig {
    /// Settle delay for the deferred single-character re-search.
    #[serde(default = "default_skim_delay_ms")]
    pub skim_delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            skim_delay_ms: default_skim_delay_ms(),
        }
    }
}

fn default_skim_delay_ms() -> u64 {
    350
}

/// UI section
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct UiConfig {
    /// Highlight whole words around matches for jump targeting.
    #[serde(default)]
    pub target_mode: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[derive(Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn skim_delay(&self) -> Duration {
        Duration::from_millis(self.search.skim_delay_ms)
    }
}
