//! Toast message bar.

use crate::ui::helpers::{char_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastView;

/// Renders the toast right-aligned, or nothing when hidden.
#[must_use]
pub fn render_toast(view: &ToastView, theme: &Theme, cols: usize) -> Option<String> {
    if !view.is_visible || view.message.is_empty() {
        return None;
    }

    let message = truncate(&view.message, cols.saturating_sub(2));
    let indent = cols.saturating_sub(char_width(&message) + 2);

    Some(format!(
        "{}{}{} {message} {}",
        " ".repeat(indent),
        Theme::fg(&theme.colors.toast_fg),
        Theme::bg(&theme.colors.toast_bg),
        Theme::reset()
    ))
}
