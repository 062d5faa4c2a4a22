//! Remote translation gateway.
//!
//! Wraps the calls to a [`TranslationBackend`]: fetching the supported languages,
//! issuing translations, and awaiting their results. Input is validated before
//! the backend is contacted. The gateway publishes its loading flag and last
//! error as `watch` channels so presentation code can observe them.

use crate::backend::{Envelope, RequestId, TranslationBackend, TranslationResultEvent};
use crate::domain::error::{Result, TranslatorError};
use crate::domain::{
    dedup_by_code, Language, TranslationRequest, TranslationResponse, LANGUAGES_FAILED, MAX_CHARS,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};

/// Gateway between the orchestrator and a translation backend.
pub struct TranslationGateway {
    backend: Arc<dyn TranslationBackend>,
    max_chars: usize,
    active_calls: AtomicUsize,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
}

/// Marks a backend call in progress; clears the loading flag on every exit path.
struct LoadingGuard<'a> {
    gateway: &'a TranslationGateway,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let remaining = self.gateway.active_calls.fetch_sub(1, Ordering::SeqCst) - 1;
        self.gateway.loading.send_replace(remaining > 0);
    }
}

impl TranslationGateway {
    /// Creates a gateway with the standard 5000 character limit.
    #[must_use]
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        let (loading, _) = watch::channel(false);
        let (error, _) = watch::channel(None);
        Self {
            backend,
            max_chars: MAX_CHARS,
            active_calls: AtomicUsize::new(0),
            loading,
            error,
        }
    }

    /// Maximum accepted input length, in characters.
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    #[must_use]
    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    #[must_use]
    pub fn watch_error(&self) -> watch::Receiver<Option<String>> {
        self.error.subscribe()
    }

    /// Opens a receiver on the backend's result notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TranslationResultEvent> {
        self.backend.subscribe()
    }

    fn begin_call(&self) -> LoadingGuard<'_> {
        self.active_calls.fetch_add(1, Ordering::SeqCst);
        self.loading.send_replace(true);
        LoadingGuard { gateway: self }
    }

    fn record(&self, error: TranslatorError) -> TranslatorError {
        self.error.send_replace(Some(error.to_string()));
        error
    }

    /// Checks a request against the input rules without contacting the backend.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError::Validation`] for blank or over-length text.
    pub fn validate(&self, request: &TranslationRequest) -> Result<()> {
        request
            .validate(self.max_chars)
            .map_err(|e| self.record(e.into()))
    }

    /// Fetches the supported languages.
    ///
    /// Duplicate codes are dropped, keeping the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError::LanguageLoad`] if the call fails or the backend
    /// answers with an error status. The generic message is also recorded as the
    /// gateway's last error.
    pub async fn load_languages(&self) -> Result<Vec<Language>> {
        match self
            .backend
            .get_supported_languages()
            .await
            .and_then(Envelope::into_result)
        {
            Ok(response) => {
                let languages = dedup_by_code(response.languages);
                tracing::debug!(language_count = languages.len(), "languages loaded");
                Ok(languages)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load languages");
                self.error.send_replace(Some(LANGUAGES_FAILED.to_string()));
                Err(TranslatorError::LanguageLoad(e.to_string()))
            }
        }
    }

    /// Fetches the supported languages, degrading to an empty list on failure.
    pub async fn list_languages(&self) -> Vec<Language> {
        self.load_languages().await.unwrap_or_default()
    }

    /// Issues a translation and returns its identifier without waiting for the result.
    ///
    /// # Errors
    ///
    /// - [`TranslatorError::Validation`] before any backend call
    /// - [`TranslatorError::Transport`] if the issuing call fails
    pub async fn submit(&self, request: &TranslationRequest) -> Result<RequestId> {
        self.validate(request)?;

        let _guard = self.begin_call();
        self.error.send_replace(None);

        self.backend
            .translate_text(&request.text, &request.source_lang, &request.target_lang)
            .await
            .map_err(|e| self.record(e))
    }

    /// Issues a translation and waits for its matching result.
    ///
    /// Notifications for other identifiers are skipped. The loading flag is held
    /// for the whole call and released however it ends.
    ///
    /// # Errors
    ///
    /// - [`TranslatorError::Validation`] before any backend call
    /// - [`TranslatorError::Transport`] if the call fails or the channel closes
    /// - [`TranslatorError::Backend`] with the backend's message on an error status
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use translaterm::backend::CommandBackend;
    /// use translaterm::domain::TranslationRequest;
    /// use translaterm::services::TranslationGateway;
    ///
    /// # async fn run() -> translaterm::Result<()> {
    /// let gateway = TranslationGateway::new(Arc::new(CommandBackend::new("trans")));
    /// let response = gateway.translate(&TranslationRequest::new("hello", "en", "es")).await?;
    /// println!("{}", response.translated_text);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        self.validate(request)?;

        let _guard = self.begin_call();
        self.error.send_replace(None);

        // Subscribed before issuing so a fast result cannot slip past.
        let mut results = self.backend.subscribe();

        let outcome = async {
            let request_id = self
                .backend
                .translate_text(&request.text, &request.source_lang, &request.target_lang)
                .await?;

            loop {
                match results.recv().await {
                    Ok(event) if event.request_id == request_id => {
                        return event.response.into_result();
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped = skipped, "result notifications lagged");
                    }
                    Err(RecvError::Closed) => {
                        return Err(TranslatorError::transport("Result channel closed"));
                    }
                }
            }
        }
        .await;

        outcome.map_err(|e| self.record(e))
    }

    /// Asks the backend to drop work for an abandoned identifier.
    pub async fn abandon(&self, request_id: RequestId) {
        self.backend.cancel(request_id).await;
    }
}

impl std::fmt::Debug for TranslationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationGateway")
            .field("max_chars", &self.max_chars)
            .field("loading", &self.is_loading())
            .field("error", &self.last_error())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ScriptedBackend;
    use crate::domain::ValidationError;

    fn languages() -> Vec<Language> {
        vec![Language::new("en", "English"), Language::new("es", "Spanish")]
    }

    fn gateway_with(backend: &Arc<ScriptedBackend>) -> TranslationGateway {
        let dyn_backend: Arc<dyn TranslationBackend> = backend.clone();
        TranslationGateway::new(dyn_backend)
    }

    #[tokio::test]
    async fn blank_text_never_reaches_backend() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        let gateway = gateway_with(&backend);

        for text in ["", " "] {
            let err = gateway
                .translate(&TranslationRequest::new(text, "en", "es"))
                .await
                .unwrap_err();
            assert!(matches!(err, TranslatorError::Validation(ValidationError::EmptyText)));
        }

        assert!(backend.submissions().is_empty());
        assert!(!gateway.is_loading());
        assert_eq!(
            gateway.last_error().as_deref(),
            Some("Please enter some text to translate")
        );
    }

    #[tokio::test]
    async fn over_length_text_is_rejected_at_5001() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        let gateway = gateway_with(&backend);

        let err = gateway
            .submit(&TranslationRequest::new("a".repeat(5001), "en", "es"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TranslatorError::Validation(ValidationError::TooLong { max: 5000 })
        ));

        let id = gateway
            .submit(&TranslationRequest::new("a".repeat(5000), "en", "es"))
            .await
            .unwrap();
        assert_eq!(backend.last_request_id(), Some(id));
        assert_eq!(gateway.max_chars(), 5000);
    }

    #[tokio::test]
    async fn translate_waits_for_matching_result() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        let gateway = Arc::new(gateway_with(&backend));

        let task = {
            let gateway = Arc::clone(&gateway);
            tokio::spawn(async move {
                gateway
                    .translate(&TranslationRequest::new("hello", "en", "es"))
                    .await
            })
        };

        while backend.last_request_id().is_none() {
            tokio::task::yield_now().await;
        }
        assert!(gateway.is_loading());

        let id = backend.last_request_id().unwrap();
        backend.complete(RequestId(id.0 + 100), "noise");
        backend.complete(id, "hola");

        let response = task.await.unwrap().unwrap();
        assert_eq!(response.translated_text, "hola");
        assert!(!gateway.is_loading());
        assert_eq!(gateway.last_error(), None);
    }

    #[tokio::test]
    async fn backend_error_message_is_passed_through() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        let gateway = Arc::new(gateway_with(&backend));

        let task = {
            let gateway = Arc::clone(&gateway);
            tokio::spawn(async move {
                gateway
                    .translate(&TranslationRequest::new("hello", "en", "es"))
                    .await
            })
        };

        while backend.last_request_id().is_none() {
            tokio::task::yield_now().await;
        }
        let id = backend.last_request_id().unwrap();
        backend.fail(id, "Translation failed: Unsupported target language: xx");

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Translation failed: Unsupported target language: xx");
        assert!(!gateway.is_loading());
        assert_eq!(gateway.last_error().as_deref(), Some(err.to_string().as_str()));
    }

    #[tokio::test]
    async fn transport_failure_resets_loading() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        backend.fail_submissions("");
        let gateway = gateway_with(&backend);

        let err = gateway
            .submit(&TranslationRequest::new("hello", "en", "es"))
            .await
            .unwrap_err();

        assert!(matches!(err, TranslatorError::Transport(_)));
        assert_eq!(err.to_string(), "Translation failed");
        assert!(!gateway.is_loading());
    }

    #[tokio::test]
    async fn watchers_follow_a_successful_translate() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        let gateway = Arc::new(gateway_with(&backend));
        let mut loading = gateway.watch_loading();
        let mut error = gateway.watch_error();

        let task = {
            let gateway = Arc::clone(&gateway);
            tokio::spawn(async move {
                gateway
                    .translate(&TranslationRequest::new("hello", "en", "es"))
                    .await
            })
        };

        while backend.last_request_id().is_none() {
            tokio::task::yield_now().await;
        }
        assert!(loading.has_changed().unwrap());
        assert!(*loading.borrow_and_update());

        backend.complete(backend.last_request_id().unwrap(), "hola");
        task.await.unwrap().unwrap();

        assert!(loading.has_changed().unwrap());
        assert!(!*loading.borrow_and_update());
        assert_eq!(*error.borrow_and_update(), None);
    }

    #[tokio::test]
    async fn error_watcher_sees_backend_message() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        let gateway = Arc::new(gateway_with(&backend));
        let mut loading = gateway.watch_loading();
        let mut error = gateway.watch_error();

        let task = {
            let gateway = Arc::clone(&gateway);
            tokio::spawn(async move {
                gateway
                    .translate(&TranslationRequest::new("hello", "en", "es"))
                    .await
            })
        };

        while backend.last_request_id().is_none() {
            tokio::task::yield_now().await;
        }
        backend.fail(backend.last_request_id().unwrap(), "Unsupported target language: xx");
        task.await.unwrap().unwrap_err();

        assert!(error.has_changed().unwrap());
        assert_eq!(
            error.borrow_and_update().as_deref(),
            Some("Unsupported target language: xx")
        );
        assert!(loading.has_changed().unwrap());
        assert!(!*loading.borrow_and_update());
    }

    #[tokio::test]
    async fn watchers_follow_a_transport_failure() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        backend.fail_submissions("backend unreachable");
        let gateway = gateway_with(&backend);
        let mut loading = gateway.watch_loading();
        let mut error = gateway.watch_error();

        gateway
            .submit(&TranslationRequest::new("hello", "en", "es"))
            .await
            .unwrap_err();

        assert!(loading.has_changed().unwrap());
        assert!(!*loading.borrow_and_update());
        assert!(error.has_changed().unwrap());
        assert_eq!(error.borrow_and_update().as_deref(), Some("backend unreachable"));
    }

    #[tokio::test]
    async fn validation_failure_leaves_loading_untouched() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        let gateway = gateway_with(&backend);
        let loading = gateway.watch_loading();
        let mut error = gateway.watch_error();

        gateway
            .submit(&TranslationRequest::new("  ", "en", "es"))
            .await
            .unwrap_err();

        assert!(!loading.has_changed().unwrap());
        assert!(error.has_changed().unwrap());
        assert_eq!(
            error.borrow_and_update().as_deref(),
            Some("Please enter some text to translate")
        );
    }

    #[tokio::test]
    async fn language_failure_degrades_to_empty_list() {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        backend.fail_languages("ipc down");
        let gateway = gateway_with(&backend);

        assert!(gateway.list_languages().await.is_empty());
        assert_eq!(gateway.last_error().as_deref(), Some(LANGUAGES_FAILED));
    }
}
