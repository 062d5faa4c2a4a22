//! Footer component renderer.
//!
//! Renders the command hints in dimmed text, truncated to the terminal width.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;

#[must_use]
pub fn render_footer(hints: &str, theme: &Theme, cols: usize) -> String {
    format!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        truncate(hints, cols),
        Theme::reset()
    )
}
