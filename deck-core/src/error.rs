//! Error types for deck parsing and serialization.
//!
//! Scaling and reordering never fail; only the text and JSON boundaries do.

use thiserror::Error;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur at the deck's parsing boundaries.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Dimensions text was not of the form `WIDTHxHEIGHT`.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Unrecognised layer command name.
    #[error("Unknown layer command: {0}")]
    UnknownCommand(String),

    /// Deck document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
