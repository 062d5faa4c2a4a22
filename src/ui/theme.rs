//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system, supporting built-in themes
//! (Catppuccin variants) and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to 24-bit ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default dark)
//! - `catppuccin-latte`: Light theme (default light)
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! accent = "#89b4fa"
//! error_fg = "#f38ba8"
//! toast_fg = "#1e1e2e"
//! toast_bg = "#a6e3a1"
//! spinner_fg = "#f9e2af"
//! ```
//!
//! # Example
//!
//! ```rust
//! use translaterm::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}translaterm{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! ```

use crate::domain::error::{Result, TranslatorError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the built-in dark theme.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";
/// Name of the built-in light theme.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#cdd6f4"`). Optional fields default to
/// `None`, letting themes opt out of certain styling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Body text color.
    pub text_normal: String,
    /// Placeholders, subtitles, and hints.
    pub text_dim: String,

    /// Panel frames.
    pub border: String,

    /// Buttons and the selected language names.
    pub accent: String,

    /// Error line.
    pub error_fg: String,

    pub toast_fg: String,
    pub toast_bg: String,

    /// Loading indicator.
    pub spinner_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError::Config`] if the file cannot be read or its
    /// TOML content does not describe a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| TranslatorError::Config(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| TranslatorError::Config(format!("Failed to parse theme TOML: {e}")))
    }

    /// Resolves a theme from an optional file, then a name, then `fallback`.
    ///
    /// Failures are logged and fall through to the next source.
    #[must_use]
    pub fn resolve(file: Option<&Path>, name: &str, fallback: &str) -> Self {
        if let Some(file) = file {
            match Self::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %file.display(), error = %e, "failed to load theme from file");
                }
            }
        }

        Self::from_name(name)
            .or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using fallback");
                Self::from_name(fallback)
            })
            .unwrap_or_default()
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns Catppuccin Mocha.
    ///
    /// Built from code so it cannot fail, even if the embedded TOML were broken.
    fn default() -> Self {
        Self {
            name: DEFAULT_DARK_THEME.to_string(),
            colors: ThemeColors {
                header_fg: "#cba6f7".to_string(),
                header_bg: None,
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                accent: "#89b4fa".to_string(),
                error_fg: "#f38ba8".to_string(),
                toast_fg: "#1e1e2e".to_string(),
                toast_bg: "#a6e3a1".to_string(),
                spinner_fg: "#f9e2af".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("catppuccin-mocha"), Some(Theme::default()));
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        assert_eq!(latte.name, "catppuccin-latte");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("zz"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let theme = Theme::resolve(Some(file.path()), DEFAULT_LIGHT_THEME, DEFAULT_DARK_THEME);
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn unreadable_theme_file_falls_back_to_name() {
        let theme = Theme::resolve(
            Some(Path::new("/nonexistent/theme.toml")),
            DEFAULT_LIGHT_THEME,
            DEFAULT_DARK_THEME,
        );
        assert_eq!(theme.name, DEFAULT_LIGHT_THEME);
    }
}
