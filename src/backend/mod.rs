//! Translation backend boundary.
//!
//! The backend is an opaque service reached through two separate channels:
//!
//! ```text
//!   translate_text(text, src, tgt) ──► RequestId          (request/response)
//!   subscribe()                    ──► translation-result (one-way notifications)
//! ```
//!
//! The identifier comes back from the issuing call; the payload arrives later on
//! the notification channel, tagged with that identifier. Nothing ties the two
//! together except the identifier, so callers correlate on it.
//!
//! # Modules
//!
//! - `messages`: Envelope, identifiers, and notification payloads
//! - `command`: Backend that shells out to a command-line translator
//! - `scripted`: Deterministic in-memory backend driven by hand

pub mod command;
pub mod messages;
pub mod scripted;

pub use command::CommandBackend;
pub use messages::{
    Envelope, LanguagesResponse, RequestId, Status, TranslationResultEvent,
    TRANSLATION_RESULT_EVENT,
};
pub use scripted::ScriptedBackend;

use crate::domain::error::Result;
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Capacity of the notification broadcast channel.
pub const NOTIFICATION_CAPACITY: usize = 64;

/// Abstraction over translation services.
///
/// # Errors
///
/// The fallible methods return [`crate::TranslatorError::Transport`] when the
/// service cannot be reached at all. Service-level failures are reported inside
/// the [`Envelope`] instead.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Fetches the list of supported languages.
    async fn get_supported_languages(&self) -> Result<Envelope<LanguagesResponse>>;

    /// Starts a translation and returns its identifier.
    ///
    /// Completion is reported later through [`TranslationBackend::subscribe`].
    async fn translate_text(&self, text: &str, source_lang: &str, target_lang: &str)
        -> Result<RequestId>;

    /// Opens a new receiver on the `translation-result` notification channel.
    fn subscribe(&self) -> broadcast::Receiver<TranslationResultEvent>;

    /// Asks the backend to abandon work whose result nobody is waiting for.
    ///
    /// Best-effort; the default does nothing.
    async fn cancel(&self, request_id: RequestId) {
        let _ = request_id;
    }
}
