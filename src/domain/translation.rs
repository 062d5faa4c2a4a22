//! Translation request and response models.
//!
//! Requests are built per submission and validated before any backend call;
//! responses replace the previous output wholesale.

use super::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Maximum number of characters accepted in a single request.
///
/// Drives both the live `n/5000` counter and the hard validation limit.
pub const MAX_CHARS: usize = 5000;

/// A single translation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    /// Checks the request against the input rules.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyText`] when the text is blank after trimming
    /// - [`ValidationError::TooLong`] when the text has more than `max_chars` characters
    ///
    /// # Examples
    ///
    /// ```
    /// use translaterm::domain::{TranslationRequest, ValidationError, MAX_CHARS};
    ///
    /// let blank = TranslationRequest::new(" ", "en", "es");
    /// assert_eq!(blank.validate(MAX_CHARS), Err(ValidationError::EmptyText));
    ///
    /// let ok = TranslationRequest::new("hello", "en", "es");
    /// assert!(ok.validate(MAX_CHARS).is_ok());
    /// ```
    pub fn validate(&self, max_chars: usize) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.text.chars().count() > max_chars {
            return Err(ValidationError::TooLong { max: max_chars });
        }
        Ok(())
    }
}

/// Result payload of a completed translation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Formats the live character counter shown under the text input.
#[must_use]
pub fn char_count_label(text: &str, max_chars: usize) -> String {
    format!("{}/{max_chars}", text.chars().count())
}
