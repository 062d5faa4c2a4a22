//! translaterm: a terminal translation front-end.
//!
//! translaterm turns whatever you type into a translation while you type:
//! - Edits are debounced; only the text standing after a quiet period is sent
//! - Every request is correlated by the identifier the backend returns, so a
//!   slow answer for old text can never overwrite a newer one
//! - Input is validated locally (empty text, more than 5000 characters)
//! - Copy results to the clipboard with toast feedback
//! - Dark and light Catppuccin themes, or your own TOML theme

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Front-End (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, debounce, correlation            │
//! │  - Action execution on tokio (runtime)              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Services      │   │ Backend       │
//! │ (ui/)         │   │ (services/)   │   │ (backend/)    │
//! │ - Rendering   │   │ - Gateway     │   │ - Envelope    │
//! │ - Theming     │   │ - Toasts      │   │ - Command     │
//! │ - Components  │   │               │   │ - Scripted    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths, clipboard (infrastructure/)      │
//! │  - Error types, languages, requests (domain/)       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - JSON-lines span journal                          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`backend`]: Translation backend boundary and implementations
//! - [`domain`]: Core domain types (languages, requests, errors)
//! - [`infrastructure`]: Platform utilities (paths, clipboard)
//! - [`services`]: Translation gateway and toast notifier
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local journal
//!
//! # Configuration
//!
//! Read from `$XDG_CONFIG_HOME/translaterm/config.toml` or `--config <path>`.
//! Every key is optional:
//!
//! ```toml
//! debounce_ms = 500
//! toast_duration_ms = 3000
//! default_target_lang = "es"
//! translator_command = "trans"
//! start_dark = true
//! dark_theme = "catppuccin-mocha"
//! light_theme = "catppuccin-latte"
//! # dark_theme_file = "~/.config/translaterm/dark.toml"
//! # light_theme_file = "~/.config/translaterm/light.toml"
//! # trace_level = "debug"
//! # data_dir = "~/.local/share/translaterm"
//! ```
//!
//! # Example
//!
//! ```rust
//! use translaterm::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! handle_event(&mut state, &Event::TextChanged("hello".to_string()))?;
//! let (_, actions) = handle_event(&mut state, &Event::DebounceElapsed { token: 1 })?;
//! assert!(matches!(actions.as_slice(), [Action::Submit { .. }]));
//! # Ok::<(), translaterm::TranslatorError>(())
//! ```

pub mod app;
pub mod backend;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Phase, Runtime, ThemeMode};
pub use domain::{Language, Result, TranslatorError};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration.
///
/// Every field has a default, so an empty file (or no file) is valid.
///
/// # Example
///
/// ```rust
/// use translaterm::Config;
///
/// let config = Config::from_toml_str("debounce_ms = 250\nstart_dark = false")?;
/// assert_eq!(config.debounce_ms, 250);
/// assert!(!config.start_dark);
/// assert_eq!(config.default_target_lang, "es");
/// # Ok::<(), translaterm::TranslatorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Quiet period after the last edit before a request is sent. Default: 500
    pub debounce_ms: u64,

    /// How long a toast stays visible. Default: 3000
    pub toast_duration_ms: u64,

    /// Target language selected at startup. Default: `"es"`
    pub default_target_lang: String,

    /// Program the command backend runs per translation. Default: `"trans"`
    pub translator_command: String,

    /// Start in the dark theme. Default: `true`
    pub start_dark: bool,

    /// Built-in theme used in dark mode. Default: `"catppuccin-mocha"`
    pub dark_theme: String,

    /// Built-in theme used in light mode. Default: `"catppuccin-latte"`
    pub light_theme: String,

    /// Custom TOML theme used in dark mode instead of `dark_theme`.
    ///
    /// See [`ui::theme`] for the format. An unreadable file falls back to
    /// `dark_theme`.
    pub dark_theme_file: Option<String>,

    /// Custom TOML theme used in light mode instead of `light_theme`.
    pub light_theme_file: Option<String>,

    /// Tracing level for the span journal.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG` wins if
    /// set. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the span journal. Default: the platform data directory.
    pub data_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            toast_duration_ms: 3000,
            default_target_lang: app::state::DEFAULT_TARGET_LANG.to_string(),
            translator_command: backend::command::DEFAULT_PROGRAM.to_string(),
            start_dark: true,
            dark_theme: ui::theme::DEFAULT_DARK_THEME.to_string(),
            light_theme: ui::theme::DEFAULT_LIGHT_THEME.to_string(),
            dark_theme_file: None,
            light_theme_file: None,
            trace_level: None,
            data_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default location.
    ///
    /// # Parameters
    ///
    /// * `path` - Explicit file from `--config`; `None` uses the default path
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError::Config`] when an explicit file cannot be read,
    /// or when any file is not valid configuration TOML. A missing default
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (infrastructure::default_config_path(), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::from_toml_str(&contents)
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(TranslatorError::Config(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError::Config`] for malformed TOML, wrong value
    /// types, or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| TranslatorError::Config(format!("Failed to parse config TOML: {e}")))
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Directory for the span journal, with `~` expanded.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::data_dir, infrastructure::expand_tilde)
    }
}

/// Builds the initial application state from configuration.
///
/// Resolves both themes, applies the starting theme mode, target language,
/// and debounce delay. Languages are loaded later through
/// [`Event::Startup`].
///
/// # Parameters
///
/// * `config` - Application configuration
///
/// # Returns
///
/// An idle `AppState` ready for event processing.
///
/// # Example
///
/// ```rust
/// use translaterm::{initialize, Config, ThemeMode};
///
/// let config = Config {
///     start_dark: false,
///     default_target_lang: "fr".to_string(),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme_mode, ThemeMode::Light);
/// assert_eq!(state.target_lang, "fr");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing translaterm");

    let dark_file = config.dark_theme_file.as_deref().map(infrastructure::expand_tilde);
    let light_file = config.light_theme_file.as_deref().map(infrastructure::expand_tilde);

    let dark = Theme::resolve(
        dark_file.as_deref(),
        &config.dark_theme,
        ui::theme::DEFAULT_DARK_THEME,
    );
    let light = Theme::resolve(
        light_file.as_deref(),
        &config.light_theme,
        ui::theme::DEFAULT_LIGHT_THEME,
    );

    let mut state = AppState::new(dark, light);
    state.theme_mode = ThemeMode::from_dark(config.start_dark);
    state.target_lang.clone_from(&config.default_target_lang);
    state.debounce_delay = config.debounce();
    state
}
