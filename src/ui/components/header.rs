//! Header component renderer.
//!
//! Renders the title bar with the theme toggle right-aligned, followed by a
//! dimmed subtitle line.

use super::theme_toggle;
use super::Intent;
use crate::ui::helpers::{char_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderView;

/// Renders the header lines.
///
/// # Layout
///
/// ```text
/// TITLE                                  [☾ dark]
/// subtitle
/// ```
///
/// The title is truncated if the toggle would not fit beside it.
#[must_use]
pub fn render_header(header: &HeaderView, theme: &Theme, cols: usize) -> Vec<String> {
    let (toggle, toggle_width) = theme_toggle::render_toggle(header.is_dark, theme);
    let title = truncate(&header.title, cols.saturating_sub(toggle_width + 1));
    let padding = cols.saturating_sub(char_width(&title) + toggle_width).max(1);

    let mut title_line = String::new();
    title_line.push_str(Theme::bold());
    title_line.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        title_line.push_str(&Theme::bg(bg));
    }
    title_line.push_str(&title);
    title_line.push_str(Theme::reset());
    title_line.push_str(&" ".repeat(padding));
    title_line.push_str(&toggle);

    let subtitle_line = format!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        truncate(&header.subtitle, cols),
        Theme::reset()
    );

    vec![title_line, subtitle_line]
}

/// The header forwards its embedded toggle.
#[must_use]
pub const fn on_toggle_theme() -> Intent {
    theme_toggle::on_toggle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::visible_width;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn toggle_is_right_aligned() {
        let header = HeaderView {
            title: "translaterm".to_string(),
            subtitle: "Translate text as you type".to_string(),
            is_dark: false,
        };
        let lines = render_header(&header, &Theme::default(), 40);

        assert_eq!(visible_width(&lines[0]), 40);
        assert!(strip_ansi(&lines[0]).ends_with("[☀ light]"));
        assert_eq!(strip_ansi(&lines[1]), "Translate text as you type");
        assert_eq!(on_toggle_theme(), Intent::ToggleTheme);
    }
}
