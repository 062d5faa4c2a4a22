//! Shared rendering utilities and helpers.
//!
//! Components build their output as plain lines containing ANSI escapes. These
//! helpers handle the text geometry: truncation, wrapping, and the
//! framed boxes used by the input and output panels. All widths are counted in
//! characters, not bytes.
//!
//! # Example
//!
//! ```rust
//! use translaterm::ui::helpers::{truncate, wrap};
//!
//! assert_eq!(truncate("translation", 8), "trans...");
//! assert_eq!(wrap("abcdef", 4), vec!["abcd", "ef"]);
//! ```

use crate::ui::theme::Theme;

/// Clears the screen and moves the cursor home.
#[must_use]
pub const fn clear_screen() -> &'static str {
    "\u{1b}[2J\u{1b}[H"
}

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to `max` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_width(text) <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(&".".repeat(max.min(3)));
    cut
}

/// Splits `text` into lines of at most `width` characters.
///
/// Existing line breaks are kept. Empty input yields no lines.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let chars: Vec<char> = paragraph.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width) {
            lines.push(chunk.iter().collect());
        }
    }

    lines
}

/// Removes ANSI escape sequences, leaving the visible text.
///
/// # Example
///
/// ```rust
/// use translaterm::ui::helpers::strip_ansi;
/// use translaterm::ui::Theme;
///
/// let styled = format!("{}hola{}", Theme::bold(), Theme::reset());
/// assert_eq!(strip_ansi(&styled), "hola");
/// ```
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut visible = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for terminator in chars.by_ref() {
                if terminator.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            visible.push(c);
        }
    }

    visible
}

/// Draws a framed panel.
///
/// ```text
/// ┌ title ──────────── top_right ┐
/// │ body                         │
/// └──────────────── bottom_right ┘
/// ```
///
/// `body` lines are already styled and are padded, not truncated, so callers
/// wrap them to `cols - 4` first.
#[must_use]
pub fn framed(
    title: &str,
    top_right: &str,
    bottom_right: &str,
    body: &[(String, usize)],
    border: &str,
    cols: usize,
) -> Vec<String> {
    let inner = cols.saturating_sub(2);
    let border_fg = Theme::fg(border);
    let reset = Theme::reset();

    let top_fill = inner.saturating_sub(char_width(title) + char_width(top_right) + 4);
    let top = format!(
        "{border_fg}┌ {title} {}{}{top_right} ┐{reset}",
        "─".repeat(top_fill),
        if top_right.is_empty() { "─" } else { " " },
    );

    let bottom_fill = inner.saturating_sub(char_width(bottom_right) + 2);
    let bottom = if bottom_right.is_empty() {
        format!("{border_fg}└{}┘{reset}", "─".repeat(inner))
    } else {
        format!(
            "{border_fg}└{} {bottom_right} ┘{reset}",
            "─".repeat(bottom_fill)
        )
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(top);
    for (styled, visible_width) in body {
        let fill = inner.saturating_sub(visible_width + 2);
        lines.push(format!(
            "{border_fg}│{reset} {styled}{} {border_fg}│{reset}",
            " ".repeat(fill)
        ));
    }
    lines.push(bottom);
    lines
}
