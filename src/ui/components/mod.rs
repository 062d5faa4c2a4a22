//! Presentation primitives.
//!
//! Each component is stateless: it receives its props struct from the view
//! model and returns styled lines. Interaction goes the other way as an
//! [`Intent`], which the front-end turns into an [`Event`] for the handler.
//!
//! # Components
//!
//! - [`header`]: Title, subtitle, and the embedded theme toggle
//! - [`theme_toggle`]: Dark/light switch
//! - [`language_selector`]: Source or target language picker
//! - [`swap_button`]: Exchanges the two languages
//! - [`text_input`]: Framed input panel with the character counter
//! - [`translation_output`]: Framed output panel with the copy button
//! - [`loading_spinner`]: Loading indicator
//! - [`toast`]: Transient message bar
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! [Header + Toggle]
//! [Subtitle]
//! [Source Selector] [Swap] [Target Selector]
//! [Text Input - framed]
//! [Spinner]
//! [Translation Output - framed]
//! [Error]
//! [Toast]
//! [Footer]
//! ```

pub mod footer;
pub mod header;
pub mod language_selector;
pub mod loading_spinner;
pub mod swap_button;
pub mod text_input;
pub mod theme_toggle;
pub mod toast;
pub mod translation_output;

use crate::app::Event;
use crate::ui::helpers::char_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Which language selector emitted a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Source,
    Target,
}

impl Selector {
    /// Maps a selector `label_id` back to its role.
    #[must_use]
    pub fn from_label_id(label_id: &str) -> Option<Self> {
        match label_id {
            "source-lang" => Some(Self::Source),
            "target-lang" => Some(Self::Target),
            _ => None,
        }
    }
}

/// Interactions emitted by the presentation primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Header (via the embedded toggle) or the toggle itself.
    ToggleTheme,
    /// A language selector picked a new code.
    SelectedLangChange { selector: Selector, code: String },
    /// A key press inside the text input.
    KeyDown { key: String, ctrl: bool, meta: bool },
    /// The text input's content was replaced.
    TextChange(String),
    /// The text input's clear button.
    Clear,
    /// The output's copy button.
    CopyClick,
    /// The swap button.
    Swap,
}

impl From<Intent> for Event {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::ToggleTheme => Self::ToggleTheme,
            Intent::SelectedLangChange { selector: Selector::Source, code } => {
                Self::SourceLangChanged(code)
            }
            Intent::SelectedLangChange { selector: Selector::Target, code } => {
                Self::TargetLangChanged(code)
            }
            Intent::KeyDown { key, ctrl, meta } => Self::KeyDown { key, ctrl, meta },
            Intent::TextChange(text) => Self::TextChanged(text),
            Intent::Clear => Self::Clear,
            Intent::CopyClick => Self::CopyClick,
            Intent::Swap => Self::Swap,
        }
    }
}

/// Renders every primitive in layout order.
#[must_use]
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();

    lines.extend(header::render_header(&vm.header, theme, cols));
    lines.push(render_language_row(vm, theme));
    lines.push(String::new());
    lines.extend(text_input::render_text_input(&vm.input, theme, cols));
    lines.push(loading_spinner::render_spinner(vm.spinner, theme));
    lines.extend(translation_output::render_output(&vm.output, theme, cols));

    if let Some(error) = &vm.error {
        lines.push(format!("{}✗ {error}{}", Theme::fg(&theme.colors.error_fg), Theme::reset()));
    }

    if let Some(line) = toast::render_toast(&vm.toast, theme, cols) {
        lines.push(line);
    }

    lines.push(footer::render_footer(&vm.hints, theme, cols));
    lines
}

/// Source selector, swap button, and target selector on one line.
fn render_language_row(vm: &UIViewModel, theme: &Theme) -> String {
    let (source, source_width) = language_selector::render_selector(&vm.source_selector, theme);
    let (swap, _) = swap_button::render_swap_button(theme);

    let gap = 28usize.saturating_sub(source_width).max(2);
    let target = language_selector::render_selector(&vm.target_selector, theme).0;

    format!("{source}{}{swap}   {target}", " ".repeat(gap))
}

/// Visible width of a line built by the components.
#[must_use]
pub fn visible_width(line: &str) -> usize {
    char_width(&crate::ui::helpers::strip_ansi(line))
}
