use thiserror::Error;

/// Custom error types for beacon
#[derive(Debug, Error)]
pub enum BeaconError {
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid config file: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
