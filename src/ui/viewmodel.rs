//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel).
//! Each presentation primitive gets its own read-only props struct and nothing
//! else; primitives never see the state they are computed from.
//!
//! # Example
//!
//! ```rust
//! use translaterm::ui::viewmodel::{SpinnerView, ToastView};
//!
//! let spinner = SpinnerView { is_loading: true };
//! let toast = ToastView { message: "Copied to clipboard!".to_string(), is_visible: true };
//! assert!(spinner.is_loading && toast.is_visible);
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderView,
    pub source_selector: LanguageSelectorView,
    pub target_selector: LanguageSelectorView,
    pub input: TextInputView,
    pub output: TranslationOutputView,
    pub spinner: SpinnerView,

    /// Error line shown under the panels, if any.
    pub error: Option<String>,

    pub toast: ToastView,

    /// Command hints for the bottom line.
    pub hints: String,
}

/// Header props; the theme toggle is embedded in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
    pub is_dark: bool,
}

/// Language selector props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelectorView {
    /// Identifies which selector this is (`source-lang` or `target-lang`).
    pub label_id: String,
    /// Human label shown before the selection.
    pub label: String,
    pub languages: Vec<LanguageOption>,
    /// Code of the selected language; may be empty before languages load.
    pub selected_lang: String,
}

impl LanguageSelectorView {
    /// Display name of the selected language, falling back to its code.
    #[must_use]
    pub fn selected_name(&self) -> &str {
        self.languages
            .iter()
            .find(|option| option.is_selected)
            .map_or(self.selected_lang.as_str(), |option| option.name.as_str())
    }
}

/// One entry of a language selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
    pub is_selected: bool,
}

/// Text input props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputView {
    pub input_id: String,
    pub placeholder: String,
    pub text: String,
    /// Live `count/max` label.
    pub char_count: String,
}

/// Translation output props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutputView {
    pub output_id: String,
    pub placeholder: String,
    pub translated_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerView {
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub is_visible: bool,
}
