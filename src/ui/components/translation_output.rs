//! Framed translation output panel.

use super::Intent;
use crate::ui::helpers::{char_width, framed, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TranslationOutputView;

const TITLE: &str = "Translation";
const COPY_LABEL: &str = "[⧉ copy]";

/// Renders the output panel; the placeholder is shown while there is no translation.
#[must_use]
pub fn render_output(view: &TranslationOutputView, theme: &Theme, cols: usize) -> Vec<String> {
    let body: Vec<(String, usize)> = if view.translated_text.is_empty() {
        vec![(
            format!("{}{}{}", Theme::fg(&theme.colors.text_dim), view.placeholder, Theme::reset()),
            char_width(&view.placeholder),
        )]
    } else {
        wrap(&view.translated_text, cols.saturating_sub(4))
            .into_iter()
            .map(|line| {
                let visible = char_width(&line);
                (
                    format!("{}{}{line}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal), Theme::reset()),
                    visible,
                )
            })
            .collect()
    };

    framed(TITLE, "", COPY_LABEL, &body, &theme.colors.border, cols)
}

#[must_use]
pub const fn on_copy_click() -> Intent {
    Intent::CopyClick
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::visible_width;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn translation_replaces_placeholder() {
        let mut view = TranslationOutputView {
            output_id: "translated-text".to_string(),
            placeholder: "Translation will appear here...".to_string(),
            translated_text: String::new(),
        };
        let theme = Theme::default();
        assert!(strip_ansi(&render_output(&view, &theme, 50)[1]).contains("will appear here"));

        view.translated_text = "hola".to_string();
        let lines = render_output(&view, &theme, 50);
        assert!(strip_ansi(&lines[1]).contains("hola"));
        assert!(lines.iter().all(|line| visible_width(line) == 50));
    }
}
