//! Backend that shells out to a command-line translator.
//!
//! Each `translate_text` call allocates the next sequential identifier, spawns
//! the translation as a background task and returns the identifier at once. The
//! task pipes the text to `<program> -b -s <source> -t <target>` (the
//! translate-shell calling convention) and publishes a `translation-result`
//! notification when done. Abandoned tasks are aborted; the child process is
//! killed when its handle is dropped.

use super::messages::{Envelope, LanguagesResponse, RequestId, TranslationResultEvent};
use super::{TranslationBackend, NOTIFICATION_CAPACITY};
use crate::domain::error::Result;
use crate::domain::{Language, TranslationResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::broadcast;
use tokio::task::AbortHandle;
use tracing::Instrument;

/// Translator program used when none is configured.
pub const DEFAULT_PROGRAM: &str = "trans";

/// Languages the command-line translator is known to handle.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("tr", "Turkish"),
];

type InFlight = Arc<Mutex<HashMap<RequestId, AbortHandle>>>;

/// Translation backend driving an external translator program.
pub struct CommandBackend {
    program: String,
    next_id: AtomicU64,
    results: broadcast::Sender<TranslationResultEvent>,
    in_flight: InFlight,
}

impl CommandBackend {
    /// Creates a backend that runs `program` for every translation.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        let (results, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            program: program.into(),
            next_id: AtomicU64::new(0),
            results,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the supported languages as domain values.
    #[must_use]
    pub fn supported_languages() -> Vec<Language> {
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(code, name)| Language::new(*code, *name))
            .collect()
    }

    /// Number of translations still running.
    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl std::fmt::Debug for CommandBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandBackend")
            .field("program", &self.program)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(supported, _)| *supported == code)
}

/// Runs one translation to completion.
///
/// Errors are plain strings; they end up in the notification envelope.
async fn run_translation(
    program: &str,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> std::result::Result<String, String> {
    if text.trim().is_empty() {
        return Err("Empty text provided".to_string());
    }

    if source_lang == target_lang {
        return Ok(text.to_string());
    }

    if !is_supported(source_lang) {
        return Err(format!("Unsupported source language: {source_lang}"));
    }
    if !is_supported(target_lang) {
        return Err(format!("Unsupported target language: {target_lang}"));
    }

    let mut child = Command::new(program)
        .args(["-b", "-s", source_lang, "-t", target_lang])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| format!("Failed to execute translation command: {e}"))?;

    let mut stdin = child.stdin.take().ok_or("Failed to get stdin")?;
    stdin
        .write_all(text.as_bytes())
        .await
        .map_err(|e| format!("Failed to write to stdin: {e}"))?;
    drop(stdin);

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| format!("Failed to read output: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(stderr.trim().to_string());
    }

    let translated = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if translated.is_empty() {
        return Err("Empty translation result".to_string());
    }

    Ok(translated)
}

/// Wraps a translation outcome into the notification envelope.
fn envelope_for(
    outcome: std::result::Result<String, String>,
    source_lang: &str,
    target_lang: &str,
) -> Envelope<TranslationResponse> {
    match outcome {
        Ok(translated_text) => Envelope::success(
            "Translation completed",
            TranslationResponse {
                translated_text,
                source_lang: source_lang.to_string(),
                target_lang: target_lang.to_string(),
            },
        ),
        Err(reason) => Envelope::error(
            format!("Translation failed: {reason}"),
            TranslationResponse {
                translated_text: String::new(),
                source_lang: source_lang.to_string(),
                target_lang: target_lang.to_string(),
            },
        ),
    }
}

#[async_trait]
impl TranslationBackend for CommandBackend {
    async fn get_supported_languages(&self) -> Result<Envelope<LanguagesResponse>> {
        Ok(Envelope::success(
            "Languages retrieved successfully",
            LanguagesResponse {
                languages: Self::supported_languages(),
            },
        ))
    }

    async fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<RequestId> {
        let request_id = RequestId(self.next_id.fetch_add(1, Ordering::SeqCst));
        tracing::debug!(
            request_id = %request_id,
            source_lang = %source_lang,
            target_lang = %target_lang,
            text_len = text.len(),
            "translation request accepted"
        );

        let program = self.program.clone();
        let text = text.to_string();
        let source_lang = source_lang.to_string();
        let target_lang = target_lang.to_string();
        let results = self.results.clone();
        let in_flight = Arc::clone(&self.in_flight);

        let span = tracing::debug_span!("command_translation", request_id = request_id.0);

        // Held across the spawn so the task cannot deregister before it is registered.
        let mut registry = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        let handle = tokio::spawn(
            async move {
                let outcome = run_translation(&program, &text, &source_lang, &target_lang).await;
                if let Err(reason) = &outcome {
                    tracing::debug!(reason = %reason, "translation failed");
                }
                let response = envelope_for(outcome, &source_lang, &target_lang);
                let event = TranslationResultEvent::new(
                    request_id,
                    text,
                    source_lang,
                    target_lang,
                    response,
                );

                in_flight
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(&request_id);

                if results.send(event).is_err() {
                    tracing::debug!("no subscribers for translation result");
                }
            }
            .instrument(span),
        );
        registry.insert(request_id, handle.abort_handle());
        drop(registry);

        Ok(request_id)
    }

    fn subscribe(&self) -> broadcast::Receiver<TranslationResultEvent> {
        self.results.subscribe()
    }

    async fn cancel(&self, request_id: RequestId) {
        let handle = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&request_id);

        if let Some(handle) = handle {
            tracing::debug!(request_id = %request_id, "abandoning superseded translation");
            handle.abort();
        }
    }
}
