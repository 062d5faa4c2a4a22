//! Error types for translaterm.
//!
//! This module defines the centralized error type [`TranslatorError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Every failure that
//! can reach the orchestrator is converted into the `error` display value, so the
//! `Display` output of each variant is what the user eventually reads.

use thiserror::Error;

/// Generic message shown when a backend call fails without a structured message.
pub const TRANSLATION_FAILED: &str = "Translation failed";

/// Generic message shown when the supported-language list cannot be fetched.
pub const LANGUAGES_FAILED: &str = "Failed to load languages";

/// Input rejected before any backend round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input is empty once surrounding whitespace is trimmed.
    #[error("Please enter some text to translate")]
    EmptyText,

    /// The input exceeds the configured maximum character count.
    #[error("Text is too long. Maximum {max} characters.")]
    TooLong {
        /// Maximum number of characters accepted.
        max: usize,
    },
}

/// The main error type for translaterm operations.
///
/// # Examples
///
/// ```
/// use translaterm::domain::{TranslatorError, ValidationError};
///
/// let err = TranslatorError::from(ValidationError::EmptyText);
/// assert_eq!(err.to_string(), "Please enter some text to translate");
///
/// let err = TranslatorError::Backend("Unsupported source language: xx".to_string());
/// assert_eq!(err.to_string(), "Unsupported source language: xx");
/// ```
#[derive(Debug, Error)]
pub enum TranslatorError {
    /// Empty or over-length input, detected locally.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend answered with `status: error`; the message is passed through verbatim.
    #[error("{0}")]
    Backend(String),

    /// The call to the backend failed outright.
    #[error("{0}")]
    Transport(String),

    /// The supported-language list could not be fetched.
    #[error("{LANGUAGES_FAILED}: {0}")]
    LanguageLoad(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing to the clipboard failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl TranslatorError {
    /// Builds a transport error, substituting the generic fallback for blank messages.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(TRANSLATION_FAILED.to_string())
        } else {
            Self::Transport(message)
        }
    }

    /// Returns `true` for failures detected before the backend was contacted.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A specialized `Result` type for translaterm operations.
pub type Result<T> = std::result::Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_long_message_names_the_limit() {
        let err = TranslatorError::from(ValidationError::TooLong { max: 5000 });
        assert_eq!(err.to_string(), "Text is too long. Maximum 5000 characters.");
        assert!(err.is_validation());
    }

    #[test]
    fn blank_transport_message_falls_back_to_generic_text() {
        assert_eq!(TranslatorError::transport("  ").to_string(), TRANSLATION_FAILED);
        assert_eq!(TranslatorError::transport("pipe closed").to_string(), "pipe closed");
    }
}
