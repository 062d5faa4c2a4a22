//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the presentation primitives
//!
//! The result is a complete frame: a clear-screen escape followed by the styled
//! lines. Writing it to the terminal is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use translaterm::app::AppState;
//! use translaterm::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default(), Theme::default());
//! let frame = render(&state, 80);
//! assert!(frame.contains("translaterm"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Narrowest layout the panels are drawn for.
const MIN_COLS: usize = 32;

/// Renders the whole UI for `state` at the given terminal width.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, state.theme(), cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let cols = cols.max(MIN_COLS);
    let lines = components::render_layout(vm, theme, cols);

    let mut frame = String::from(clear_screen());
    frame.push_str(&lines.join("\r\n"));
    frame.push_str("\r\n");
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn frame_includes_error_and_toast() {
        let mut state = AppState::new(Theme::default(), Theme::default());
        state.error = Some("Translation failed".to_string());
        state.toast_message = "Copied to clipboard!".to_string();
        state.toast_visible = true;

        let frame = strip_ansi(&render(&state, 60));
        assert!(frame.contains("✗ Translation failed"));
        assert!(frame.contains("Copied to clipboard!"));
    }

    #[test]
    fn narrow_terminals_are_clamped() {
        let state = AppState::new(Theme::default(), Theme::default());
        let frame = render(&state, 5);
        assert!(strip_ansi(&frame).contains("Source text"));
    }
}
