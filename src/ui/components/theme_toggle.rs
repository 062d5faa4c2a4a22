//! Dark/light theme switch.

use super::Intent;
use crate::ui::theme::Theme;

/// Renders the toggle label for the current mode.
///
/// Returns the styled label and its visible width.
#[must_use]
pub fn render_toggle(is_dark: bool, theme: &Theme) -> (String, usize) {
    let label = if is_dark { "[☾ dark]" } else { "[☀ light]" };
    (
        format!("{}{label}{}", Theme::fg(&theme.colors.accent), Theme::reset()),
        label.chars().count(),
    )
}

/// The toggle only ever asks to flip.
#[must_use]
pub const fn on_toggle() -> Intent {
    Intent::ToggleTheme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn label_follows_mode() {
        let theme = Theme::default();
        assert_eq!(strip_ansi(&render_toggle(true, &theme).0), "[☾ dark]");
        assert_eq!(strip_ansi(&render_toggle(false, &theme).0), "[☀ light]");
        assert_eq!(on_toggle(), Intent::ToggleTheme);
    }
}
