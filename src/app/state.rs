//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of every mutable value the
//! translation view shows, together with the bookkeeping that keeps requests
//! correlated. Presentation primitives only ever see the snapshot produced by
//! [`AppState::compute_viewmodel`].
//!
//! # Correlation
//!
//! Two pieces of bookkeeping decide which backend result may touch the output:
//!
//! - `awaiting_ticket`: the local sequence number of the submission whose
//!   identifier has not come back yet
//! - `pending_request`: the backend identifier of the authoritative submission
//!
//! Issuing a new submission (or emptying the input) replaces both, so anything
//! still travelling for an older submission is discarded when it arrives. A
//! result that overtakes its own identifier is parked in a short queue until
//! the identifier is known.
//!
//! # Example
//!
//! ```rust
//! use translaterm::app::AppState;
//! use translaterm::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), Theme::default());
//! state.input_text = "hello".to_string();
//! let actions = state.on_input_mutation();
//! assert_eq!(actions.len(), 1);
//! assert!(!state.is_loading());
//! ```

use super::actions::Action;
use super::modes::{Phase, ThemeMode};
use crate::backend::{RequestId, TranslationResultEvent};
use crate::domain::{char_count_label, Language, TranslationRequest, MAX_CHARS, TRANSLATION_FAILED};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    HeaderView, LanguageOption, LanguageSelectorView, SpinnerView, TextInputView, ToastView,
    TranslationOutputView, UIViewModel,
};
use std::collections::VecDeque;
use std::time::Duration;

/// Quiet period between the last edit and the submission.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Target language selected before the user picks one.
pub const DEFAULT_TARGET_LANG: &str = "es";

/// Results parked while their identifier is still unknown.
const EARLY_RESULT_CAPACITY: usize = 8;

const TITLE: &str = "translaterm";
const SUBTITLE: &str = "Translate text as you type";
const INPUT_PLACEHOLDER: &str = "Enter text to translate...";
const OUTPUT_PLACEHOLDER: &str = "Translation will appear here...";
const HINTS: &str =
    ":src <lang>  :tgt <lang>  :swap  :clear  :go  :copy  :theme  :quit  (other lines replace the text)";

/// Central application state container.
///
/// Mutated only by [`handle_event`](crate::app::handle_event). The correlation
/// fields are private; read them through the accessor methods.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Supported languages, loaded once at startup.
    pub languages: Vec<Language>,

    pub input_text: String,

    /// Source language code; defaults to the first loaded language.
    pub source_lang: String,

    pub target_lang: String,

    /// Last applied translation.
    pub output_text: String,

    /// Message shown to the user, if any.
    pub error: Option<String>,

    pub theme_mode: ThemeMode,
    pub dark_theme: Theme,
    pub light_theme: Theme,

    pub toast_message: String,
    pub toast_visible: bool,

    /// Lifecycle of the latest submission.
    pub phase: Phase,

    pub max_chars: usize,
    pub debounce_delay: Duration,

    debounce_token: u64,
    debounce_armed: bool,
    submit_seq: u64,
    awaiting_ticket: Option<u64>,
    pending_request: Option<RequestId>,
    early_results: VecDeque<TranslationResultEvent>,
}

impl AppState {
    /// Creates an idle state with empty input and the default timings.
    ///
    /// The target language starts as `es`; the source language stays empty
    /// until languages are loaded.
    #[must_use]
    pub fn new(dark_theme: Theme, light_theme: Theme) -> Self {
        Self {
            languages: vec![],
            input_text: String::new(),
            source_lang: String::new(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
            output_text: String::new(),
            error: None,
            theme_mode: ThemeMode::Dark,
            dark_theme,
            light_theme,
            toast_message: String::new(),
            toast_visible: false,
            phase: Phase::Idle,
            max_chars: MAX_CHARS,
            debounce_delay: DEFAULT_DEBOUNCE,
            debounce_token: 0,
            debounce_armed: false,
            submit_seq: 0,
            awaiting_ticket: None,
            pending_request: None,
            early_results: VecDeque::new(),
        }
    }

    /// True while a submission is issued and unresolved.
    ///
    /// Covers both the window before the backend returned an identifier and the
    /// wait for its result.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.awaiting_ticket.is_some() || self.pending_request.is_some()
    }

    /// Identifier whose result may still update the output.
    #[must_use]
    pub const fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    #[must_use]
    pub const fn is_debounce_armed(&self) -> bool {
        self.debounce_armed
    }

    /// Theme matching the current light/dark mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        match self.theme_mode {
            ThemeMode::Dark => &self.dark_theme,
            ThemeMode::Light => &self.light_theme,
        }
    }

    /// Sets the supported languages and defaults the source to the first one.
    pub fn set_languages(&mut self, languages: Vec<Language>) {
        if let Some(first) = languages.first() {
            if self.source_lang.is_empty() {
                self.source_lang.clone_from(&first.code);
            }
        }
        self.languages = languages;
    }

    /// Reacts to any change of text or languages.
    ///
    /// Cancels the armed timer. Empty input clears output and error and
    /// supersedes the outstanding submission; anything else arms a fresh timer.
    pub fn on_input_mutation(&mut self) -> Vec<Action> {
        let mut actions = self.cancel_debounce();

        if self.input_text.trim().is_empty() {
            actions.extend(self.reset_to_idle());
            return actions;
        }

        self.debounce_token += 1;
        self.debounce_armed = true;
        self.phase = Phase::Debouncing;

        tracing::debug!(token = self.debounce_token, "debounce armed");

        actions.push(Action::ArmDebounce {
            token: self.debounce_token,
            delay: self.debounce_delay,
        });
        actions
    }

    /// Handles an elapsed debounce timer.
    ///
    /// Returns `None` when the token belongs to a timer that was cancelled or
    /// replaced.
    pub fn on_debounce_elapsed(&mut self, token: u64) -> Option<Vec<Action>> {
        if !self.debounce_armed || token != self.debounce_token {
            tracing::debug!(token = token, current = self.debounce_token, "stale debounce ignored");
            return None;
        }

        self.debounce_armed = false;
        Some(self.submit_now())
    }

    /// Cancels the armed timer and submits the current input right away.
    pub fn submit_immediately(&mut self) -> Vec<Action> {
        let mut actions = self.cancel_debounce();
        actions.extend(self.submit_now());
        actions
    }

    fn cancel_debounce(&mut self) -> Vec<Action> {
        if self.debounce_armed {
            self.debounce_armed = false;
            vec![Action::CancelDebounce]
        } else {
            vec![]
        }
    }

    fn reset_to_idle(&mut self) -> Vec<Action> {
        self.output_text.clear();
        self.error = None;
        let actions = self.supersede();
        self.phase = Phase::Idle;
        actions
    }

    /// Drops the authority of any outstanding submission.
    fn supersede(&mut self) -> Vec<Action> {
        self.early_results.clear();

        if let Some(ticket) = self.awaiting_ticket.take() {
            tracing::debug!(ticket = ticket, "awaiting submission superseded");
            self.phase = Phase::Superseded;
        }

        match self.pending_request.take() {
            Some(request_id) => {
                tracing::debug!(request_id = %request_id, "pending request superseded");
                self.phase = Phase::Superseded;
                vec![Action::AbandonRequest(request_id)]
            }
            None => vec![],
        }
    }

    fn submit_now(&mut self) -> Vec<Action> {
        let text = self.input_text.trim();
        if text.is_empty() {
            return self.reset_to_idle();
        }

        let request = TranslationRequest::new(text, &self.source_lang, &self.target_lang);
        let mut actions = self.supersede();

        if let Err(e) = request.validate(self.max_chars) {
            tracing::debug!(error = %e, "submission rejected locally");
            self.error = Some(e.to_string());
            self.phase = Phase::Failed;
            return actions;
        }

        self.submit_seq += 1;
        self.awaiting_ticket = Some(self.submit_seq);
        self.error = None;
        self.phase = Phase::Submitted;

        tracing::debug!(
            ticket = self.submit_seq,
            source_lang = %request.source_lang,
            target_lang = %request.target_lang,
            text_len = request.text.len(),
            "submission issued"
        );

        actions.push(Action::Submit {
            ticket: self.submit_seq,
            request,
        });
        actions
    }

    /// Records the identifier returned for a submission.
    ///
    /// Identifiers of superseded submissions are handed back for abandonment.
    /// Returns whether the visible state changed.
    pub fn on_submission_accepted(&mut self, ticket: u64, request_id: RequestId) -> (bool, Vec<Action>) {
        if self.awaiting_ticket != Some(ticket) {
            tracing::debug!(ticket = ticket, request_id = %request_id, "late identifier for superseded submission");
            return (false, vec![Action::AbandonRequest(request_id)]);
        }

        self.awaiting_ticket = None;
        self.pending_request = Some(request_id);

        let early = self
            .early_results
            .iter()
            .position(|event| event.request_id == request_id)
            .and_then(|index| self.early_results.remove(index));
        self.early_results.clear();

        if let Some(event) = early {
            tracing::debug!(request_id = %request_id, "applying result that arrived before its identifier");
            self.apply_result(&event);
            return (true, vec![]);
        }

        (false, vec![])
    }

    /// Records a submission that failed before the backend accepted it.
    pub fn on_submission_failed(&mut self, ticket: u64, message: &str) -> bool {
        if self.awaiting_ticket != Some(ticket) {
            return false;
        }

        self.awaiting_ticket = None;
        self.early_results.clear();
        self.error = Some(message.to_string());
        self.phase = Phase::Failed;
        true
    }

    /// Correlates a result notification with the authoritative identifier.
    ///
    /// Returns whether the result was applied.
    pub fn on_translation_result(&mut self, event: &TranslationResultEvent) -> bool {
        if self.pending_request == Some(event.request_id) {
            self.apply_result(event);
            return true;
        }

        if self.awaiting_ticket.is_some() {
            if self.early_results.len() == EARLY_RESULT_CAPACITY {
                self.early_results.pop_front();
            }
            self.early_results.push_back(event.clone());
        } else {
            tracing::debug!(request_id = %event.request_id, "discarding stale translation result");
        }

        false
    }

    /// Fails the in-flight request after result notifications were dropped.
    ///
    /// Its result may have been among the skipped ones, so waiting on it could
    /// leave the loading indicator on forever.
    pub fn on_results_lagged(&mut self) -> (bool, Vec<Action>) {
        if self.awaiting_ticket.is_none() && self.pending_request.is_none() {
            return (false, vec![]);
        }

        let actions = self.supersede();
        self.error = Some(TRANSLATION_FAILED.to_string());
        self.phase = Phase::Failed;
        (true, actions)
    }

    fn apply_result(&mut self, event: &TranslationResultEvent) {
        self.pending_request = None;

        if event.response.is_error() {
            tracing::debug!(request_id = %event.request_id, message = %event.response.message, "translation failed");
            self.error = Some(event.response.message.clone());
            self.phase = Phase::Failed;
            return;
        }

        self.error = None;
        if !event.response.data.translated_text.is_empty() {
            self.output_text.clone_from(&event.response.data.translated_text);
        }
        self.phase = Phase::Resolved;
    }

    /// Computes the renderable snapshot of the current state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use translaterm::app::AppState;
    /// use translaterm::ui::Theme;
    ///
    /// let state = AppState::new(Theme::default(), Theme::default());
    /// let vm = state.compute_viewmodel();
    /// assert_eq!(vm.input.char_count, "0/5000");
    /// assert_eq!(vm.target_selector.selected_lang, "es");
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: HeaderView {
                title: TITLE.to_string(),
                subtitle: SUBTITLE.to_string(),
                is_dark: self.theme_mode.is_dark(),
            },
            source_selector: self.compute_selector("source-lang", "From", &self.source_lang),
            target_selector: self.compute_selector("target-lang", "To", &self.target_lang),
            input: TextInputView {
                input_id: "source-text".to_string(),
                placeholder: INPUT_PLACEHOLDER.to_string(),
                text: self.input_text.clone(),
                char_count: char_count_label(&self.input_text, self.max_chars),
            },
            output: TranslationOutputView {
                output_id: "translated-text".to_string(),
                placeholder: OUTPUT_PLACEHOLDER.to_string(),
                translated_text: self.output_text.clone(),
            },
            spinner: SpinnerView {
                is_loading: self.is_loading(),
            },
            error: self.error.clone(),
            toast: ToastView {
                message: self.toast_message.clone(),
                is_visible: self.toast_visible,
            },
            hints: HINTS.to_string(),
        }
    }

    fn compute_selector(&self, label_id: &str, label: &str, selected: &str) -> LanguageSelectorView {
        LanguageSelectorView {
            label_id: label_id.to_string(),
            label: label.to_string(),
            languages: self
                .languages
                .iter()
                .map(|language| LanguageOption {
                    code: language.code.clone(),
                    name: language.name.clone(),
                    is_selected: language.code == selected,
                })
                .collect(),
            selected_lang: selected.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Envelope;
    use crate::domain::TranslationResponse;

    fn state() -> AppState {
        let mut state = AppState::new(Theme::default(), Theme::default());
        state.set_languages(vec![Language::new("en", "English"), Language::new("es", "Spanish")]);
        state
    }

    fn success(request_id: u64, text: &str) -> TranslationResultEvent {
        TranslationResultEvent::new(
            RequestId(request_id),
            "hello",
            "en",
            "es",
            Envelope::success(
                "Translation completed",
                TranslationResponse {
                    translated_text: text.to_string(),
                    source_lang: "en".to_string(),
                    target_lang: "es".to_string(),
                },
            ),
        )
    }

    fn issue(state: &mut AppState, text: &str) -> u64 {
        state.input_text = text.to_string();
        let actions = state.submit_immediately();
        match actions.last() {
            Some(Action::Submit { ticket, .. }) => *ticket,
            other => panic!("expected a submission, got {other:?}"),
        }
    }

    #[test]
    fn source_defaults_to_first_language() {
        let state = state();
        assert_eq!(state.source_lang, "en");
        assert_eq!(state.target_lang, "es");
    }

    #[test]
    fn consecutive_edits_rearm_with_new_tokens() {
        let mut state = state();
        state.input_text = "h".to_string();
        let first = state.on_input_mutation();
        state.input_text = "he".to_string();
        let second = state.on_input_mutation();

        assert_eq!(
            first,
            vec![Action::ArmDebounce { token: 1, delay: DEFAULT_DEBOUNCE }]
        );
        assert_eq!(
            second,
            vec![
                Action::CancelDebounce,
                Action::ArmDebounce { token: 2, delay: DEFAULT_DEBOUNCE }
            ]
        );
        assert!(state.on_debounce_elapsed(1).is_none());
        assert!(state.on_debounce_elapsed(2).is_some());
    }

    #[test]
    fn submission_sends_trimmed_text() {
        let mut state = state();
        state.input_text = "  hello  ".to_string();
        let actions = state.submit_immediately();
        assert_eq!(
            actions,
            vec![Action::Submit {
                ticket: 1,
                request: TranslationRequest::new("hello", "en", "es"),
            }]
        );
        assert!(state.is_loading());
        assert_eq!(state.phase, Phase::Submitted);
    }

    #[test]
    fn result_before_identifier_is_applied_on_acceptance() {
        let mut state = state();
        let ticket = issue(&mut state, "hello");

        assert!(!state.on_translation_result(&success(4, "hola")));
        let (changed, actions) = state.on_submission_accepted(ticket, RequestId(4));

        assert!(changed);
        assert!(actions.is_empty());
        assert_eq!(state.output_text, "hola");
        assert!(!state.is_loading());
    }

    #[test]
    fn late_identifier_of_superseded_submission_is_abandoned() {
        let mut state = state();
        let old = issue(&mut state, "hello");
        let new = issue(&mut state, "hello there");

        let (changed, actions) = state.on_submission_accepted(old, RequestId(0));
        assert!(!changed);
        assert_eq!(actions, vec![Action::AbandonRequest(RequestId(0))]);

        state.on_submission_accepted(new, RequestId(1));
        assert_eq!(state.pending_request(), Some(RequestId(1)));
    }

    #[test]
    fn over_length_input_fails_without_loading() {
        let mut state = state();
        state.input_text = "a".repeat(5001);
        let actions = state.submit_immediately();

        assert!(actions.is_empty());
        assert!(!state.is_loading());
        assert_eq!(
            state.error.as_deref(),
            Some("Text is too long. Maximum 5000 characters.")
        );
    }

    #[test]
    fn empty_output_text_keeps_previous_output() {
        let mut state = state();
        let ticket = issue(&mut state, "hello");
        state.on_submission_accepted(ticket, RequestId(0));
        state.on_translation_result(&success(0, "hola"));

        let ticket = issue(&mut state, "hello!");
        state.on_submission_accepted(ticket, RequestId(1));
        state.error = Some("stale".to_string());
        assert!(state.on_translation_result(&success(1, "")));

        assert_eq!(state.output_text, "hola");
        assert_eq!(state.error, None);
    }

    #[test]
    fn lagged_results_fail_the_pending_request() {
        let mut state = state();
        let ticket = issue(&mut state, "hello");
        state.on_submission_accepted(ticket, RequestId(3));

        let (changed, actions) = state.on_results_lagged();

        assert!(changed);
        assert_eq!(actions, vec![Action::AbandonRequest(RequestId(3))]);
        assert_eq!(state.error.as_deref(), Some(TRANSLATION_FAILED));
        assert_eq!(state.phase, Phase::Failed);
        assert!(!state.is_loading());

        assert!(!state.on_translation_result(&success(3, "hola")));
        assert_eq!(state.output_text, "");
    }

    #[test]
    fn lagged_results_while_idle_change_nothing() {
        let mut state = state();
        assert_eq!(state.on_results_lagged(), (false, vec![]));
        assert_eq!(state.error, None);
    }

    #[test]
    fn viewmodel_marks_selected_languages() {
        let state = state();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.source_selector.selected_name(), "English");
        assert_eq!(vm.target_selector.selected_name(), "Spanish");
        assert!(vm.header.is_dark);
        assert!(!vm.spinner.is_loading);
    }
}
