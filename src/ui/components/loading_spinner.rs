//! Loading indicator.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SpinnerView;

/// Renders the spinner line; blank when idle so the layout does not jump.
#[must_use]
pub fn render_spinner(view: SpinnerView, theme: &Theme) -> String {
    if view.is_loading {
        format!("{}⠿ Translating...{}", Theme::fg(&theme.colors.spinner_fg), Theme::reset())
    } else {
        String::new()
    }
}
