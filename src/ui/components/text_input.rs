//! Framed text input panel.
//!
//! Shows the current input (or a dimmed placeholder) wrapped to the panel
//! width, with the live character counter in the top border and the clear
//! button in the bottom border.

use super::Intent;
use crate::ui::helpers::{char_width, framed, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TextInputView;

const TITLE: &str = "Source text";
const CLEAR_LABEL: &str = "[× clear]";

/// Renders the input panel.
#[must_use]
pub fn render_text_input(view: &TextInputView, theme: &Theme, cols: usize) -> Vec<String> {
    let width = cols.saturating_sub(4);

    let body: Vec<(String, usize)> = if view.text.is_empty() {
        vec![(
            format!("{}{}{}", Theme::fg(&theme.colors.text_dim), view.placeholder, Theme::reset()),
            char_width(&view.placeholder),
        )]
    } else {
        wrap(&view.text, width)
            .into_iter()
            .map(|line| {
                let visible = char_width(&line);
                (
                    format!("{}{line}{}", Theme::fg(&theme.colors.text_normal), Theme::reset()),
                    visible,
                )
            })
            .collect()
    };

    framed(TITLE, &view.char_count, CLEAR_LABEL, &body, &theme.colors.border, cols)
}

/// The input's content was replaced.
#[must_use]
pub fn on_text_change(text: &str) -> Intent {
    Intent::TextChange(text.to_string())
}

#[must_use]
pub const fn on_clear() -> Intent {
    Intent::Clear
}

#[must_use]
pub fn on_key_down(key: &str, ctrl: bool, meta: bool) -> Intent {
    Intent::KeyDown {
        key: key.to_string(),
        ctrl,
        meta,
    }
}
