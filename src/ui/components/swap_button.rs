//! Swap button component.

use super::Intent;
use crate::ui::theme::Theme;

const LABEL: &str = "[⇄ swap]";

/// Returns the styled button and its visible width.
#[must_use]
pub fn render_swap_button(theme: &Theme) -> (String, usize) {
    (
        format!("{}{LABEL}{}", Theme::fg(&theme.colors.accent), Theme::reset()),
        LABEL.chars().count(),
    )
}

#[must_use]
pub const fn on_click() -> Intent {
    Intent::Swap
}
