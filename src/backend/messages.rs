//! Wire types exchanged with the translation backend.
//!
//! This module defines the request/response protocol between the front-end and
//! the backend: the generic result envelope, the language list payload, request
//! identifiers, and the `translation-result` notification that reports a
//! translation's completion out of band from the call that started it.

use crate::domain::error::{Result, TranslatorError};
use crate::domain::{Language, TranslationResponse};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the notification carrying translation results.
pub const TRANSLATION_RESULT_EVENT: &str = "translation-result";

/// Outcome class of a backend envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Info,
    Warning,
    Error,
}

/// Generic result envelope returned by every backend operation.
///
/// A `status` of [`Status::Error`] means the operation failed and `message`
/// describes why; `data` may still carry a (blank) payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn new(status: Status, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::new(Status::Success, message, data)
    }

    #[must_use]
    pub fn error(message: impl Into<String>, data: T) -> Self {
        Self::new(Status::Error, message, data)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// Unwraps the payload, short-circuiting on an error status.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError::Backend`] carrying `message` verbatim when the
    /// status is [`Status::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use translaterm::backend::Envelope;
    ///
    /// let ok = Envelope::success("done", 42);
    /// assert_eq!(ok.into_result().unwrap(), 42);
    ///
    /// let failed = Envelope::error("Translation failed: boom", 0);
    /// assert_eq!(failed.into_result().unwrap_err().to_string(), "Translation failed: boom");
    /// ```
    pub fn into_result(self) -> Result<T> {
        if self.is_error() {
            Err(TranslatorError::Backend(self.message))
        } else {
            Ok(self.data)
        }
    }
}

/// Payload of `get_supported_languages`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<Language>,
}

/// Backend-assigned identifier of an issued translation.
///
/// Opaque to the front-end: only compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The `translation-result` notification.
///
/// Delivered zero or more times per issued request; only one matching the
/// authoritative identifier is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResultEvent {
    pub request_id: RequestId,
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub response: Envelope<TranslationResponse>,
}

impl TranslationResultEvent {
    /// Builds a notification echoing the request that produced it.
    #[must_use]
    pub fn new(
        request_id: RequestId,
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        response: Envelope<TranslationResponse>,
    ) -> Self {
        Self {
            request_id,
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_event_matches_wire_format() {
        let json = r#"{
            "requestId": 7,
            "text": "hello",
            "sourceLang": "en",
            "targetLang": "es",
            "response": {
                "status": "success",
                "message": "Translation completed",
                "data": {"translatedText": "hola", "sourceLang": "en", "targetLang": "es"}
            }
        }"#;

        let event: TranslationResultEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.request_id, RequestId(7));
        assert_eq!(event.response.status, Status::Success);
        assert_eq!(event.response.data.translated_text, "hola");
    }

    #[test]
    fn warning_status_is_not_an_error() {
        let envelope = Envelope::new(Status::Warning, "partial", "data");
        assert_eq!(envelope.into_result().unwrap(), "data");
    }
}
