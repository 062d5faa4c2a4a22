//! Deterministic in-memory backend.
//!
//! Records every submission and never completes anything on its own: results are
//! published by hand with [`ScriptedBackend::complete`], [`ScriptedBackend::fail`]
//! or [`ScriptedBackend::publish`], in whatever order a scenario needs. Used by
//! the integration tests to reproduce overlapping and out-of-order deliveries.

use super::messages::{Envelope, LanguagesResponse, RequestId, TranslationResultEvent};
use super::{TranslationBackend, NOTIFICATION_CAPACITY};
use crate::domain::error::{Result, TranslatorError};
use crate::domain::{Language, TranslationRequest, TranslationResponse};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tokio::sync::broadcast;

/// Hand-driven backend for scenarios and tests.
pub struct ScriptedBackend {
    languages: Mutex<std::result::Result<Vec<Language>, String>>,
    submit_failure: Mutex<Option<String>>,
    next_id: AtomicU64,
    submissions: Mutex<Vec<(RequestId, TranslationRequest)>>,
    cancelled: Mutex<Vec<RequestId>>,
    results: broadcast::Sender<TranslationResultEvent>,
}

impl ScriptedBackend {
    /// Creates a backend that serves `languages` and accepts every submission.
    #[must_use]
    pub fn new(languages: Vec<Language>) -> Self {
        let (results, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            languages: Mutex::new(Ok(languages)),
            submit_failure: Mutex::new(None),
            next_id: AtomicU64::new(1),
            submissions: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
            results,
        }
    }

    /// Makes `get_supported_languages` fail at the transport level.
    pub fn fail_languages(&self, reason: impl Into<String>) {
        *self.languages.lock().unwrap_or_else(PoisonError::into_inner) = Err(reason.into());
    }

    /// Makes every later `translate_text` call fail at the transport level.
    pub fn fail_submissions(&self, reason: impl Into<String>) {
        *self.submit_failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(reason.into());
    }

    /// Submissions received so far, in order.
    #[must_use]
    pub fn submissions(&self) -> Vec<(RequestId, TranslationRequest)> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Identifiers the front-end asked to abandon, in order.
    #[must_use]
    pub fn cancelled(&self) -> Vec<RequestId> {
        self.cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Identifier of the most recent submission, if any.
    #[must_use]
    pub fn last_request_id(&self) -> Option<RequestId> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .map(|(id, _)| *id)
    }

    /// Publishes an arbitrary notification.
    pub fn publish(&self, event: TranslationResultEvent) {
        if self.results.send(event).is_err() {
            tracing::debug!("scripted result published with no subscribers");
        }
    }

    /// Publishes a successful result for `request_id`.
    ///
    /// Echoes the submitted request when it is known.
    pub fn complete(&self, request_id: RequestId, translated_text: &str) {
        let request = self.request_for(request_id);
        let response = TranslationResponse {
            translated_text: translated_text.to_string(),
            source_lang: request.source_lang.clone(),
            target_lang: request.target_lang.clone(),
        };
        self.publish(TranslationResultEvent::new(
            request_id,
            request.text,
            request.source_lang,
            request.target_lang,
            Envelope::success("Translation completed", response),
        ));
    }

    /// Publishes an error result for `request_id`.
    pub fn fail(&self, request_id: RequestId, message: &str) {
        let request = self.request_for(request_id);
        let response = TranslationResponse {
            translated_text: String::new(),
            source_lang: request.source_lang.clone(),
            target_lang: request.target_lang.clone(),
        };
        self.publish(TranslationResultEvent::new(
            request_id,
            request.text,
            request.source_lang,
            request.target_lang,
            Envelope::error(message, response),
        ));
    }

    fn request_for(&self, request_id: RequestId) -> TranslationRequest {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|(id, _)| *id == request_id)
            .map(|(_, request)| request.clone())
            .unwrap_or_else(|| TranslationRequest::new("", "", ""))
    }
}

#[async_trait]
impl TranslationBackend for ScriptedBackend {
    async fn get_supported_languages(&self) -> Result<Envelope<LanguagesResponse>> {
        let languages = self
            .languages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        languages
            .map(|languages| {
                Envelope::success("Languages retrieved successfully", LanguagesResponse { languages })
            })
            .map_err(TranslatorError::transport)
    }

    async fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<RequestId> {
        let failure = self
            .submit_failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(reason) = failure {
            return Err(TranslatorError::transport(reason));
        }

        let request_id = RequestId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((request_id, TranslationRequest::new(text, source_lang, target_lang)));
        Ok(request_id)
    }

    fn subscribe(&self) -> broadcast::Receiver<TranslationResultEvent> {
        self.results.subscribe()
    }

    async fn cancel(&self, request_id: RequestId) {
        self.cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request_id);
    }
}
