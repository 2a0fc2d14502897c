//! Error types for the planner_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for planner_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout level outside Beginner/Intermediate/Advanced
    #[error("Invalid workout level: {0:?} (expected Beginner, Intermediate or Advanced)")]
    InvalidLevel(String),

    /// Any other enumerated form input that did not match a known option
    #[error("Invalid {field}: {value:?}")]
    InvalidChoice { field: &'static str, value: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid_choice(field: &'static str, value: &str) -> Self {
        Error::InvalidChoice {
            field,
            value: value.to_string(),
        }
    }
}
