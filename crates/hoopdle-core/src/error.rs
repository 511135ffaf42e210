//! Error types for the hoopdle client engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the hoopdle client.
///
/// Variants follow the failure taxonomy of the game client: validation
/// failures are local and never reach the network, load and submission
/// failures degrade the session without ending it. No variant is fatal;
/// every error is converted to a user-visible message at the boundary
/// where it occurs.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GameError {
    /// Guess rejected before contacting the judge (name not in the roster,
    /// submission already in flight, game already won).
    #[error("{0}")]
    Validation(String),

    /// Roster or daily-clue fetch failed. The session stays playable with
    /// reduced functionality.
    #[error("Load error: {0}")]
    Load(String),

    /// Judge call failed or returned a non-success status. The attempt is
    /// not counted.
    #[error("Submission error: {0}")]
    Submission(String),

    /// Feedback payload was malformed. The attempt still counts; feedback
    /// degrades to all-miss.
    #[error("Interpretation error: {0}")]
    Interpretation(String),

    /// Client configuration could not be assembled (bad config file
    /// values, unusable HTTP client settings).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failure while reading local state, e.g. the config
    /// file.
    #[error("IO error: {message}")]
    Io { message: String },

    /// A config file or payload failed to (de)serialize.
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Failure with no domain meaning; not expected during normal play.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GameError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Load error
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load(message.into())
    }

    /// Creates a Submission error
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if this is a Submission error
    pub fn is_submission(&self) -> bool {
        matches!(self, Self::Submission(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GameError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for GameError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, GameError>`.
pub type Result<T> = std::result::Result<T, GameError>;
