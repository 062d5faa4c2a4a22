//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler. Actions are the boundary between pure state transitions
//! and effectful work: timers, backend calls, clipboard writes, and toasts.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime executes them in order; any outcome that needs to reach the state
//! again comes back as a new [`Event`](crate::app::Event).
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use translaterm::app::Action;
//!
//! let actions = vec![
//!     Action::CancelDebounce,
//!     Action::ArmDebounce { token: 3, delay: Duration::from_millis(500) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::backend::RequestId;
use crate::domain::TranslationRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetches the supported languages once; answered with `LanguagesLoaded`.
    LoadLanguages,

    /// Starts the debounce timer, replacing any armed one.
    ///
    /// When it elapses the runtime sends `DebounceElapsed` with the same token.
    ArmDebounce {
        /// Generation of the timer; older tokens are ignored by the handler.
        token: u64,
        /// Quiet period before the submission fires.
        delay: Duration,
    },

    /// Stops the armed debounce timer, if any.
    CancelDebounce,

    /// Issues a translation through the gateway.
    ///
    /// Answered with `SubmissionAccepted` or `SubmissionFailed` carrying the
    /// same ticket.
    Submit {
        /// Local sequence number of this submission.
        ticket: u64,
        /// Validated request to send.
        request: TranslationRequest,
    },

    /// Tells the backend nobody is waiting for this identifier anymore.
    AbandonRequest(RequestId),

    /// Shows a transient toast with the default duration.
    ShowToast(String),

    /// Writes text to the clipboard; answered with `ClipboardWritten`.
    CopyToClipboard(String),

    /// Stops the event loop.
    Quit,
}
