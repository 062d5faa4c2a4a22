//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled frames through composable
//! presentation primitives, and maps terminal input back to events.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//!                                                         │
//! terminal line → prompt::parse_line → Intent → Event ◄───┘ (user)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Props for every primitive
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: The presentation primitives and their intents
//! - [`prompt`]: Line-oriented command parsing for the terminal front-end
//! - [`helpers`]: Shared text geometry (wrapping, framing, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod prompt;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use components::{Intent, Selector};
pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::UIViewModel;
