//! Line-oriented input for the terminal front-end.
//!
//! Every line read from the terminal is either new input text or a `:command`
//! standing in for a click on one of the primitives. Commands are routed
//! through the primitives' intent constructors so the terminal and any other
//! front-end produce the same events.
//!
//! | Line              | Event                                   |
//! |-------------------|-----------------------------------------|
//! | `hello world`     | `TextChanged("hello world")`            |
//! | `::literal`       | `TextChanged(":literal")`               |
//! | `:src <lang>`     | `SourceLangChanged(code)` (fuzzy match) |
//! | `:tgt <lang>`     | `TargetLangChanged(code)` (fuzzy match) |
//! | `:swap`           | `Swap`                                  |
//! | `:clear`          | `Clear`                                 |
//! | `:go`             | Ctrl+Enter `KeyDown`                    |
//! | `:copy`           | `CopyClick`                             |
//! | `:theme`          | `ToggleTheme`                           |
//! | `:quit`, `:q`     | `Quit`                                  |

use crate::app::Event;
use crate::ui::components::{
    header, language_selector, swap_button, text_input, translation_output, Intent,
};
use crate::ui::viewmodel::{LanguageSelectorView, UIViewModel};
use thiserror::Error;

/// A command line that could not be turned into an event.
///
/// The message is shown to the user as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("Unknown command: :{0}")]
    UnknownCommand(String),

    #[error("Usage: :{0} <language>")]
    MissingLanguage(&'static str),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns a [`PromptError`] for unknown commands, missing arguments, and
/// languages that match nothing listed by the view's selectors.
///
/// # Example
///
/// ```rust
/// use translaterm::app::{AppState, Event};
/// use translaterm::domain::Language;
/// use translaterm::ui::prompt::parse_line;
/// use translaterm::ui::Theme;
///
/// let mut state = AppState::new(Theme::default(), Theme::default());
/// state.set_languages(vec![Language::new("en", "English"), Language::new("fr", "French")]);
/// let view = state.compute_viewmodel();
///
/// assert_eq!(
///     parse_line(":tgt fren", &view),
///     Ok(Some(Event::TargetLangChanged("fr".to_string())))
/// );
/// assert_eq!(
///     parse_line("bonjour", &view),
///     Ok(Some(Event::TextChanged("bonjour".to_string())))
/// );
/// ```
pub fn parse_line(line: &str, view: &UIViewModel) -> Result<Option<Event>, PromptError> {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');

    if line.trim().is_empty() {
        return Ok(None);
    }

    if let Some(literal) = line.strip_prefix("::") {
        return Ok(Some(text_input::on_text_change(&format!(":{literal}")).into()));
    }

    let Some(command) = line.strip_prefix(':') else {
        return Ok(Some(text_input::on_text_change(line).into()));
    };

    let (name, argument) = command
        .trim()
        .split_once(char::is_whitespace)
        .map_or((command.trim(), ""), |(name, rest)| (name, rest.trim()));

    let intent = match name {
        "src" | "from" => select(&view.source_selector, "src", argument)?,
        "tgt" | "to" => select(&view.target_selector, "tgt", argument)?,
        "swap" => swap_button::on_click(),
        "clear" => text_input::on_clear(),
        "go" => text_input::on_key_down("Enter", true, false),
        "copy" => translation_output::on_copy_click(),
        "theme" => header::on_toggle_theme(),
        "quit" | "q" => return Ok(Some(Event::Quit)),
        other => return Err(PromptError::UnknownCommand(other.to_string())),
    };

    Ok(Some(intent.into()))
}

fn select(
    selector: &LanguageSelectorView,
    command: &'static str,
    query: &str,
) -> Result<Intent, PromptError> {
    if query.is_empty() {
        return Err(PromptError::MissingLanguage(command));
    }

    language_selector::on_select(selector, query)
        .ok_or_else(|| PromptError::UnknownLanguage(query.to_string()))
}
