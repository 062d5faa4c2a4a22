//! Services sitting between the orchestrator and the outside world.
//!
//! # Modules
//!
//! - [`gateway`]: Validated access to the translation backend with loading/error observables
//! - [`notifier`]: Transient toast messages with self-scheduled hiding

pub mod gateway;
pub mod notifier;

pub use gateway::TranslationGateway;
pub use notifier::{ToastContainer, ToastMessage, ToastNotifier, DEFAULT_TOAST_DURATION};
