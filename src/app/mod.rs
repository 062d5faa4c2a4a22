//! Application layer coordinating state, events, and actions.
//!
//! This module holds the translation view's logic, sitting between the
//! terminal front-end (main.rs) and the gateway/notifier services. It
//! implements the event-driven architecture that keeps requests correlated.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Task Outcomes ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Request lifecycle and theme mode types
//! - [`state`]: Central application state container and view model computation
//! - [`runtime`]: Event loop executing actions on tokio
//!
//! # Example
//!
//! ```rust
//! use translaterm::app::{handle_event, Action, AppState, Event};
//! use translaterm::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::Startup)?;
//! assert_eq!(actions, vec![Action::LoadLanguages]);
//! # Ok::<(), translaterm::TranslatorError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod runtime;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Phase, ThemeMode};
pub use runtime::Runtime;
pub use state::AppState;
