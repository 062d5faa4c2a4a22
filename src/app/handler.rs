//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns user intents, timer
//! expiries, and backend notifications into state changes and side effects.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front-end, the timers, or the backend
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the runtime to execute
//!
//! # Event Types
//!
//! - **Input**: `TextChanged`, `Clear`, `SourceLangChanged`, `TargetLangChanged`, `Swap`, `KeyDown`
//! - **Presentation**: `ToggleTheme`, `CopyClick`, `Notice`, `CommandLine`
//! - **Timers and surfaces**: `DebounceElapsed`, `ToastText`, `ToastVisibility`
//! - **Backend**: `LanguagesLoaded`, `SubmissionAccepted`, `SubmissionFailed`, `TranslationResult`, `ResultsLagged`
//!
//! # Example
//!
//! ```rust
//! use translaterm::app::{handle_event, Action, AppState, Event};
//! use translaterm::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Startup)?;
//! assert!(should_render);
//! assert_eq!(actions, vec![Action::LoadLanguages]);
//! # Ok::<(), translaterm::TranslatorError>(())
//! ```

use crate::app::{Action, AppState};
use crate::backend::{RequestId, TranslationResultEvent};
use crate::domain::error::Result;
use crate::domain::{Language, LANGUAGES_FAILED};
use crate::ui::prompt;

/// Toast shown when the output is empty on copy.
pub const NOTHING_TO_COPY: &str = "Nothing to copy";
/// Toast shown after a successful clipboard write.
pub const COPIED: &str = "Copied to clipboard!";
/// Toast shown when the clipboard write failed.
pub const COPY_FAILED: &str = "Failed to copy";

/// Events triggered by the user, the timers, or the backend.
///
/// The handler processes them one at a time, so every transition sees a
/// consistent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// First event of a session; requests the language list.
    Startup,

    /// Supported languages arrived (possibly empty after a failure).
    LanguagesLoaded {
        languages: Vec<Language>,
        /// The fetch failed and `languages` is the degraded empty list.
        failed: bool,
    },

    /// The input text was replaced.
    TextChanged(String),
    /// The input was cleared.
    Clear,
    SourceLangChanged(String),
    TargetLangChanged(String),
    /// Exchanges source and target languages.
    Swap,

    /// A key press inside the text input. Ctrl/Cmd+Enter submits right away.
    KeyDown {
        key: String,
        ctrl: bool,
        meta: bool,
    },

    ToggleTheme,
    CopyClick,

    /// Outcome of a clipboard write.
    ClipboardWritten { ok: bool },

    /// A raw line typed at the prompt, parsed against the loaded languages.
    CommandLine(String),

    /// A message for the user that is not a translation error.
    Notice(String),

    /// The toast surface received new text.
    ToastText(String),
    /// The toast surface was revealed or concealed.
    ToastVisibility(bool),

    /// A debounce timer elapsed.
    DebounceElapsed { token: u64 },

    /// The backend returned an identifier for a submission.
    SubmissionAccepted { ticket: u64, request_id: RequestId },

    /// A submission failed before the backend accepted it.
    SubmissionFailed { ticket: u64, message: String },

    /// A `translation-result` notification.
    TranslationResult(TranslationResultEvent),

    /// Result notifications were dropped because the loop fell behind.
    ResultsLagged { skipped: u64 },

    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple `(should_render, actions)`. `should_render` is `true` when the
/// visible state changed; `actions` may be empty.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature open for handlers
/// that need to propagate failures.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::Startup => Ok((true, vec![Action::LoadLanguages])),
        Event::LanguagesLoaded { languages, failed } => {
            tracing::debug!(count = languages.len(), failed = failed, "languages loaded");
            state.set_languages(languages.clone());
            if *failed {
                state.error = Some(LANGUAGES_FAILED.to_string());
            }
            Ok((true, vec![]))
        }
        Event::TextChanged(text) => {
            if &state.input_text == text {
                return Ok((false, vec![]));
            }
            state.input_text.clone_from(text);
            Ok((true, state.on_input_mutation()))
        }
        Event::Clear => {
            state.input_text.clear();
            Ok((true, state.on_input_mutation()))
        }
        Event::SourceLangChanged(code) => {
            state.source_lang.clone_from(code);
            Ok((true, state.on_input_mutation()))
        }
        Event::TargetLangChanged(code) => {
            state.target_lang.clone_from(code);
            Ok((true, state.on_input_mutation()))
        }
        Event::Swap => {
            std::mem::swap(&mut state.source_lang, &mut state.target_lang);
            tracing::debug!(source_lang = %state.source_lang, target_lang = %state.target_lang, "languages swapped");
            Ok((true, state.on_input_mutation()))
        }
        Event::KeyDown { key, ctrl, meta } => {
            if (*ctrl || *meta) && key == "Enter" {
                tracing::debug!("manual submission");
                return Ok((true, state.submit_immediately()));
            }
            Ok((false, vec![]))
        }
        Event::ToggleTheme => {
            state.theme_mode = state.theme_mode.toggled();
            Ok((true, vec![]))
        }
        Event::CopyClick => {
            if state.output_text.is_empty() {
                return Ok((false, vec![Action::ShowToast(NOTHING_TO_COPY.to_string())]));
            }
            Ok((false, vec![Action::CopyToClipboard(state.output_text.clone())]))
        }
        Event::ClipboardWritten { ok } => {
            let message = if *ok { COPIED } else { COPY_FAILED };
            Ok((false, vec![Action::ShowToast(message.to_string())]))
        }
        Event::CommandLine(line) => match prompt::parse_line(line, &state.compute_viewmodel()) {
            Ok(Some(event)) => handle_event(state, &event),
            Ok(None) => Ok((false, vec![])),
            Err(e) => {
                tracing::debug!(error = %e, "rejected command line");
                Ok((false, vec![Action::ShowToast(e.to_string())]))
            }
        },
        Event::Notice(message) => Ok((false, vec![Action::ShowToast(message.clone())])),
        Event::ToastText(text) => {
            state.toast_message.clone_from(text);
            Ok((true, vec![]))
        }
        Event::ToastVisibility(visible) => {
            let changed = state.toast_visible != *visible;
            state.toast_visible = *visible;
            Ok((changed, vec![]))
        }
        Event::DebounceElapsed { token } => Ok(state
            .on_debounce_elapsed(*token)
            .map_or((false, vec![]), |actions| (true, actions))),
        Event::SubmissionAccepted { ticket, request_id } => {
            Ok(state.on_submission_accepted(*ticket, *request_id))
        }
        Event::SubmissionFailed { ticket, message } => {
            Ok((state.on_submission_failed(*ticket, message), vec![]))
        }
        Event::TranslationResult(result) => Ok((state.on_translation_result(result), vec![])),
        Event::ResultsLagged { skipped } => {
            tracing::warn!(skipped = skipped, "result notifications lagged");
            Ok(state.on_results_lagged())
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Startup => "startup",
        Event::LanguagesLoaded { .. } => "languages_loaded",
        Event::TextChanged(_) => "text_changed",
        Event::Clear => "clear",
        Event::SourceLangChanged(_) => "source_lang_changed",
        Event::TargetLangChanged(_) => "target_lang_changed",
        Event::Swap => "swap",
        Event::KeyDown { .. } => "key_down",
        Event::ToggleTheme => "toggle_theme",
        Event::CopyClick => "copy_click",
        Event::ClipboardWritten { .. } => "clipboard_written",
        Event::CommandLine(_) => "command_line",
        Event::Notice(_) => "notice",
        Event::ToastText(_) => "toast_text",
        Event::ToastVisibility(_) => "toast_visibility",
        Event::DebounceElapsed { .. } => "debounce_elapsed",
        Event::SubmissionAccepted { .. } => "submission_accepted",
        Event::SubmissionFailed { .. } => "submission_failed",
        Event::TranslationResult(_) => "translation_result",
        Event::ResultsLagged { .. } => "results_lagged",
        Event::Quit => "quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Phase;
    use crate::backend::Envelope;
    use crate::domain::TranslationResponse;
    use crate::ui::Theme;
    use pretty_assertions::assert_eq;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default(), Theme::default());
        handle_event(
            &mut state,
            &Event::LanguagesLoaded {
                languages: vec![Language::new("en", "English"), Language::new("es", "Spanish")],
                failed: false,
            },
        )
        .unwrap();
        state
    }

    fn error_result(request_id: u64, message: &str) -> TranslationResultEvent {
        TranslationResultEvent::new(
            RequestId(request_id),
            "hello",
            "en",
            "es",
            Envelope::error(message, TranslationResponse::default()),
        )
    }

    #[test]
    fn failed_language_load_sets_generic_error() {
        let mut state = AppState::new(Theme::default(), Theme::default());
        handle_event(
            &mut state,
            &Event::LanguagesLoaded { languages: vec![], failed: true },
        )
        .unwrap();

        assert!(state.languages.is_empty());
        assert_eq!(state.source_lang, "");
        assert_eq!(state.error.as_deref(), Some("Failed to load languages"));
    }

    #[test]
    fn clearing_supersedes_pending_request() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::TextChanged("hello".into())).unwrap();
        handle_event(&mut state, &Event::DebounceElapsed { token: 1 }).unwrap();
        handle_event(
            &mut state,
            &Event::SubmissionAccepted { ticket: 1, request_id: RequestId(9) },
        )
        .unwrap();
        state.output_text = "hola".to_string();

        let (_, actions) = handle_event(&mut state, &Event::Clear).unwrap();

        assert_eq!(actions, vec![Action::AbandonRequest(RequestId(9))]);
        assert_eq!(state.output_text, "");
        assert!(!state.is_loading());
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn swap_exchanges_languages_and_rearms() {
        let mut state = loaded_state();
        state.input_text = "hello".to_string();

        let (_, actions) = handle_event(&mut state, &Event::Swap).unwrap();

        assert_eq!((state.source_lang.as_str(), state.target_lang.as_str()), ("es", "en"));
        assert!(matches!(actions.as_slice(), [Action::ArmDebounce { .. }]));
    }

    #[test]
    fn ctrl_enter_cancels_timer_and_submits() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::TextChanged("hello".into())).unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::KeyDown { key: "Enter".into(), ctrl: true, meta: false },
        )
        .unwrap();

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], Action::CancelDebounce);
        assert!(matches!(actions[1], Action::Submit { ticket: 1, .. }));

        let (render, actions) =
            handle_event(&mut state, &Event::DebounceElapsed { token: 1 }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn plain_enter_does_nothing() {
        let mut state = loaded_state();
        state.input_text = "hello".to_string();
        let (render, actions) = handle_event(
            &mut state,
            &Event::KeyDown { key: "Enter".into(), ctrl: false, meta: false },
        )
        .unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn backend_error_keeps_output_and_clears_loading() {
        let mut state = loaded_state();
        state.output_text = "hola".to_string();
        handle_event(&mut state, &Event::TextChanged("hello".into())).unwrap();
        handle_event(&mut state, &Event::DebounceElapsed { token: 1 }).unwrap();
        handle_event(
            &mut state,
            &Event::SubmissionAccepted { ticket: 1, request_id: RequestId(0) },
        )
        .unwrap();

        handle_event(
            &mut state,
            &Event::TranslationResult(error_result(0, "Translation failed: boom")),
        )
        .unwrap();

        assert_eq!(state.output_text, "hola");
        assert_eq!(state.error.as_deref(), Some("Translation failed: boom"));
        assert!(!state.is_loading());
    }

    #[test]
    fn transport_failure_sets_error_and_resets_loading() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::TextChanged("hello".into())).unwrap();
        handle_event(&mut state, &Event::DebounceElapsed { token: 1 }).unwrap();
        assert!(state.is_loading());

        handle_event(
            &mut state,
            &Event::SubmissionFailed { ticket: 1, message: "Translation failed".into() },
        )
        .unwrap();

        assert!(!state.is_loading());
        assert_eq!(state.error.as_deref(), Some("Translation failed"));
    }

    #[test]
    fn copy_feedback_toasts() {
        let mut state = loaded_state();
        let (_, actions) = handle_event(&mut state, &Event::CopyClick).unwrap();
        assert_eq!(actions, vec![Action::ShowToast("Nothing to copy".into())]);

        state.output_text = "hola".to_string();
        let (_, actions) = handle_event(&mut state, &Event::CopyClick).unwrap();
        assert_eq!(actions, vec![Action::CopyToClipboard("hola".into())]);

        let (_, actions) =
            handle_event(&mut state, &Event::ClipboardWritten { ok: false }).unwrap();
        assert_eq!(actions, vec![Action::ShowToast("Failed to copy".into())]);
    }

    #[test]
    fn command_lines_route_through_prompt() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::CommandLine(":tgt english".into())).unwrap();
        assert_eq!(state.target_lang, "en");

        let (_, actions) =
            handle_event(&mut state, &Event::CommandLine(":tgt klingon".into())).unwrap();
        assert!(matches!(actions.as_slice(), [Action::ShowToast(_)]));
        assert_eq!(state.target_lang, "en");
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert!(!state.theme_mode.is_dark());
        assert!(!state.compute_viewmodel().header.is_dark);
    }
}
