//! Error types for minq-build
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for minq-build
#[derive(Error, Debug)]
pub enum MinqBuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Project error: {0}")]
    Project(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for minq-build operations
pub type Result<T> = std::result::Result<T, MinqBuildError>;

impl MinqBuildError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            MinqBuildError::Io(e) => format!("File operation failed: {}", e),
            MinqBuildError::Config(msg) => format!("Configuration error: {}", msg),
            MinqBuildError::Project(msg) => format!("Subproject issue: {}", msg),
            MinqBuildError::NotFound(msg) => format!("Not found: {}", msg),
            _ => self.to_string(),
        }
    }
}
