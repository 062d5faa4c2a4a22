//! Language selector component.

use super::{Intent, Selector};
use crate::domain::resolve_language;
use crate::domain::Language;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LanguageSelectorView;

/// Renders `Label: Name (code)`.
///
/// Returns the styled text and its visible width. An unset selection shows
/// `none`.
#[must_use]
pub fn render_selector(view: &LanguageSelectorView, theme: &Theme) -> (String, usize) {
    let selection = if view.selected_lang.is_empty() {
        "none".to_string()
    } else {
        format!("{} ({})", view.selected_name(), view.selected_lang)
    };

    let width = view.label.chars().count() + 2 + selection.chars().count();
    let styled = format!(
        "{}{}: {}{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        view.label,
        Theme::reset(),
        Theme::fg(&theme.colors.accent),
        selection,
        Theme::reset()
    );

    (styled, width)
}

/// Turns a user query into a change intent for this selector.
///
/// The query may be a code, a name, or a fuzzy fragment of a name. Returns
/// `None` when no listed language matches or the selector id is unknown.
#[must_use]
pub fn on_select(view: &LanguageSelectorView, query: &str) -> Option<Intent> {
    let selector = Selector::from_label_id(&view.label_id)?;
    let languages: Vec<Language> = view
        .languages
        .iter()
        .map(|option| Language::new(&option.code, &option.name))
        .collect();

    resolve_language(&languages, query).map(|code| Intent::SelectedLangChange {
        selector,
        code: code.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::viewmodel::LanguageOption;

    fn view(selected: &str) -> LanguageSelectorView {
        LanguageSelectorView {
            label_id: "target-lang".to_string(),
            label: "To".to_string(),
            languages: vec![
                LanguageOption { code: "en".into(), name: "English".into(), is_selected: selected == "en" },
                LanguageOption { code: "fr".into(), name: "French".into(), is_selected: selected == "fr" },
            ],
            selected_lang: selected.to_string(),
        }
    }

    #[test]
    fn renders_name_and_code() {
        let (styled, width) = render_selector(&view("fr"), &Theme::default());
        assert_eq!(strip_ansi(&styled), "To: French (fr)");
        assert_eq!(width, "To: French (fr)".chars().count());
    }

    #[test]
    fn unknown_code_renders_code_only() {
        let (styled, _) = render_selector(&view("xx"), &Theme::default());
        assert_eq!(strip_ansi(&styled), "To: xx (xx)");
        let (styled, _) = render_selector(&view(""), &Theme::default());
        assert_eq!(strip_ansi(&styled), "To: none");
    }

    #[test]
    fn selection_resolves_against_listed_languages() {
        assert_eq!(
            on_select(&view("en"), "fren"),
            Some(Intent::SelectedLangChange { selector: Selector::Target, code: "fr".into() })
        );
        assert_eq!(on_select(&view("en"), "japanese"), None);
    }
}
