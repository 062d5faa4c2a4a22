//! Shared fixtures for the runtime integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use translaterm::backend::{RequestId, ScriptedBackend};
use translaterm::infrastructure::MemoryClipboard;
use translaterm::services::TranslationGateway;
use translaterm::{AppState, Event, Language, Runtime, Theme};

pub const DEBOUNCE: Duration = Duration::from_millis(500);
pub const TOAST: Duration = Duration::from_millis(3000);

pub struct Harness {
    pub backend: Arc<ScriptedBackend>,
    pub clipboard: Arc<MemoryClipboard>,
    pub gateway: Arc<TranslationGateway>,
    pub runtime: Runtime,
}

pub fn languages() -> Vec<Language> {
    vec![
        Language::new("en", "English"),
        Language::new("es", "Spanish"),
        Language::new("fr", "French"),
    ]
}

impl Harness {
    /// Runtime over a scripted backend, not started yet.
    pub fn new() -> Self {
        let backend = Arc::new(ScriptedBackend::new(languages()));
        let clipboard = Arc::new(MemoryClipboard::new());
        let gateway = Arc::new(TranslationGateway::new(backend.clone()));
        let runtime = Runtime::new(
            AppState::new(Theme::default(), Theme::default()),
            gateway.clone(),
            clipboard.clone(),
            TOAST,
        );

        Self {
            backend,
            clipboard,
            gateway,
            runtime,
        }
    }

    /// Runtime with languages loaded.
    pub async fn started() -> Self {
        let mut harness = Self::new();
        harness.send(Event::Startup).await;
        harness
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Dispatches `event` and everything it causes that is ready without time passing.
    pub async fn send(&mut self, event: Event) {
        self.runtime.dispatch(event).unwrap();
        self.runtime.settle().await.unwrap();
    }

    pub async fn type_text(&mut self, text: &str) {
        self.send(Event::TextChanged(text.to_string())).await;
    }

    /// Moves the paused clock forward and handles whatever fired.
    pub async fn advance(&mut self, by: Duration) {
        tokio::time::advance(by).await;
        self.runtime.settle().await.unwrap();
    }

    /// Types `text`, waits out the debounce, and returns the issued identifier.
    pub async fn translate(&mut self, text: &str) -> RequestId {
        self.type_text(text).await;
        self.advance(DEBOUNCE).await;
        self.backend.last_request_id().unwrap()
    }

    pub async fn complete(&mut self, request_id: RequestId, translated: &str) {
        self.backend.complete(request_id, translated);
        self.runtime.settle().await.unwrap();
    }
}
