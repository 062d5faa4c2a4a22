//! Transient toast notifications.
//!
//! A [`ToastNotifier`] drives a message surface made of two parts: a container
//! that can be revealed or concealed and a message slot holding the text. Both
//! are bound explicitly; an unbound notifier ignores every call.
//!
//! Each `show` schedules its own `hide`. Overlapping calls are not coalesced, so
//! the timer of an earlier toast can conceal a later one before its own time.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default visibility of a toast.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// The part of a toast surface that appears and disappears.
pub trait ToastContainer: Send + Sync {
    fn reveal(&self);
    fn conceal(&self);
}

/// The part of a toast surface that holds the message text.
pub trait ToastMessage: Send + Sync {
    fn set_text(&self, text: &str);
}

/// Shows short messages on a bound surface and hides them after a delay.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use translaterm::services::{ToastContainer, ToastMessage, ToastNotifier};
///
/// struct Stderr;
/// impl ToastContainer for Stderr {
///     fn reveal(&self) {}
///     fn conceal(&self) {}
/// }
/// impl ToastMessage for Stderr {
///     fn set_text(&self, text: &str) { eprintln!("{text}"); }
/// }
///
/// # async fn run() {
/// let surface = Arc::new(Stderr);
/// let mut toasts = ToastNotifier::new();
/// toasts.bind(surface.clone(), surface);
/// toasts.show("Copied to clipboard!");
/// # }
/// ```
#[derive(Clone)]
pub struct ToastNotifier {
    container: Option<Arc<dyn ToastContainer>>,
    message: Option<Arc<dyn ToastMessage>>,
    default_duration: Duration,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastNotifier {
    /// Creates an unbound notifier with the 3000 ms default duration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_duration(DEFAULT_TOAST_DURATION)
    }

    #[must_use]
    pub fn with_default_duration(default_duration: Duration) -> Self {
        Self {
            container: None,
            message: None,
            default_duration,
        }
    }

    /// Attaches the notifier to a surface, replacing any earlier binding.
    pub fn bind(&mut self, container: Arc<dyn ToastContainer>, message: Arc<dyn ToastMessage>) {
        self.container = Some(container);
        self.message = Some(message);
    }

    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.container.is_some() && self.message.is_some()
    }

    #[must_use]
    pub const fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Shows `text` for the default duration.
    ///
    /// Returns the handle of the scheduled hide, or `None` when unbound.
    pub fn show(&self, text: &str) -> Option<JoinHandle<()>> {
        self.show_for(text, self.default_duration)
    }

    /// Sets the text, reveals the container, and schedules a hide after `duration`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show_for(&self, text: &str, duration: Duration) -> Option<JoinHandle<()>> {
        let (Some(container), Some(message)) = (&self.container, &self.message) else {
            tracing::warn!(text = %text, "toast requested before a surface was bound");
            return None;
        };

        tracing::debug!(text = %text, duration_ms = duration.as_millis(), "showing toast");
        message.set_text(text);
        container.reveal();

        let container = Arc::clone(container);
        Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            container.conceal();
        }))
    }

    /// Conceals the container right away.
    pub fn hide(&self) {
        if let Some(container) = &self.container {
            container.conceal();
        }
    }
}

impl std::fmt::Debug for ToastNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastNotifier")
            .field("bound", &self.is_bound())
            .field("default_duration", &self.default_duration)
            .finish()
    }
}
