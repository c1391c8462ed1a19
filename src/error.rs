//! Error types for the overlay engine

use thiserror::Error;

/// Result type alias for overlay operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Overlay engine error types
///
/// Tokenizing and live matching never return these to the caller;
/// pattern errors are folded into a [`crate::MatchReport`] status.
/// Only configuration loading surfaces them directly.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown token type: {0}")]
    UnknownToken(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),
}
