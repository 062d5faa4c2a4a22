//! Event loop driving the application state.
//!
//! The [`Runtime`] owns the [`AppState`] and performs the [`Action`]s returned
//! by [`handle_event`]. Every effect that finishes later (a timer, a backend
//! call, a clipboard write, a toast change) reports back as an [`Event`] on the
//! runtime's own channel, so the state is only ever touched from the loop.
//!
//! ```text
//!  front-end ──► Event ──► handle_event ──► Action ──► spawned task
//!                  ▲                                       │
//!                  └──────────── Event ◄───────────────────┘
//!  backend notifications ──► Event::TranslationResult
//! ```

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::state::AppState;
use crate::backend::TranslationResultEvent;
use crate::domain::error::Result;
use crate::infrastructure::Clipboard;
use crate::services::{ToastContainer, ToastMessage, ToastNotifier, TranslationGateway};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::{RecvError, TryRecvError as BroadcastTryRecvError};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Empty polling rounds before [`Runtime::settle`] gives up waiting for tasks.
const SETTLE_ROUNDS: usize = 32;

/// Toast surface that reports every change back to the loop as an event.
struct EventToastSurface {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventToastSurface {
    fn send(&self, event: Event) {
        if self.tx.send(event).is_err() {
            tracing::debug!("event loop gone, dropping toast update");
        }
    }
}

impl ToastContainer for EventToastSurface {
    fn reveal(&self) {
        self.send(Event::ToastVisibility(true));
    }

    fn conceal(&self) {
        self.send(Event::ToastVisibility(false));
    }
}

impl ToastMessage for EventToastSurface {
    fn set_text(&self, text: &str) {
        self.send(Event::ToastText(text.to_string()));
    }
}

/// Owns the state and executes side effects on the current tokio runtime.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use translaterm::app::{AppState, Event, Runtime};
/// use translaterm::backend::CommandBackend;
/// use translaterm::infrastructure::MemoryClipboard;
/// use translaterm::services::TranslationGateway;
/// use translaterm::ui::Theme;
///
/// # async fn run() -> translaterm::Result<()> {
/// let gateway = Arc::new(TranslationGateway::new(Arc::new(CommandBackend::new("trans"))));
/// let state = AppState::new(Theme::default(), Theme::default());
/// let mut runtime = Runtime::new(
///     state,
///     gateway,
///     Arc::new(MemoryClipboard::new()),
///     Duration::from_millis(3000),
/// );
///
/// runtime.dispatch(Event::Startup)?;
/// while let Some(event) = runtime.next_event().await {
///     runtime.dispatch(event)?;
///     if runtime.should_quit() {
///         break;
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Runtime {
    state: AppState,
    gateway: Arc<TranslationGateway>,
    clipboard: Arc<dyn Clipboard>,
    toasts: ToastNotifier,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    results: broadcast::Receiver<TranslationResultEvent>,
    results_open: bool,
    debounce: Option<JoinHandle<()>>,
    quit: bool,
}

impl Runtime {
    /// Creates a runtime and subscribes to the gateway's result notifications.
    ///
    /// Must be called inside a tokio runtime; toasts and timers spawn tasks.
    #[must_use]
    pub fn new(
        state: AppState,
        gateway: Arc<TranslationGateway>,
        clipboard: Arc<dyn Clipboard>,
        toast_duration: Duration,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let surface = Arc::new(EventToastSurface {
            tx: events_tx.clone(),
        });
        let mut toasts = ToastNotifier::with_default_duration(toast_duration);
        toasts.bind(surface.clone(), surface);

        let results = gateway.subscribe();

        Self {
            state,
            gateway,
            clipboard,
            toasts,
            events_tx,
            events_rx,
            results,
            results_open: true,
            debounce: None,
            quit: false,
        }
    }

    /// Handle for feeding front-end events into the loop.
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.events_tx.clone()
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles one event and performs the resulting actions.
    ///
    /// # Returns
    ///
    /// Whether the view changed and should be redrawn.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (should_render, actions) = handle_event(&mut self.state, &event)?;

        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );

        for action in actions {
            self.execute_action(action);
        }

        Ok(should_render)
    }

    /// Waits for the next event from the front-end, a task, or the backend.
    ///
    /// Returns `None` once no source can produce events anymore.
    pub async fn next_event(&mut self) -> Option<Event> {
        loop {
            if !self.results_open {
                return self.events_rx.recv().await;
            }

            tokio::select! {
                biased;

                event = self.events_rx.recv() => return event,
                result = self.results.recv() => match result {
                    Ok(result) => return Some(Event::TranslationResult(result)),
                    Err(RecvError::Lagged(skipped)) => return Some(Event::ResultsLagged { skipped }),
                    Err(RecvError::Closed) => {
                        tracing::debug!("result channel closed");
                        self.results_open = false;
                    }
                },
            }
        }
    }

    /// Returns an event that is ready right now, if any.
    pub fn try_next_event(&mut self) -> Option<Event> {
        if let Ok(event) = self.events_rx.try_recv() {
            return Some(event);
        }

        while self.results_open {
            match self.results.try_recv() {
                Ok(result) => return Some(Event::TranslationResult(result)),
                Err(BroadcastTryRecvError::Lagged(skipped)) => {
                    return Some(Event::ResultsLagged { skipped });
                }
                Err(BroadcastTryRecvError::Closed) => self.results_open = false,
                Err(BroadcastTryRecvError::Empty) => break,
            }
        }

        None
    }

    /// Lets spawned tasks run and dispatches everything they report.
    ///
    /// Returns once the loop has been quiet for a few scheduler rounds. Time
    /// does not advance, so armed timers stay pending.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Runtime::dispatch`].
    pub async fn settle(&mut self) -> Result<()> {
        let mut quiet_rounds = 0;

        while quiet_rounds < SETTLE_ROUNDS {
            tokio::task::yield_now().await;

            match self.try_next_event() {
                Some(event) => {
                    self.dispatch(event)?;
                    quiet_rounds = 0;
                }
                None => quiet_rounds += 1,
            }
        }

        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::LoadLanguages => {
                let gateway = Arc::clone(&self.gateway);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let event = match gateway.load_languages().await {
                        Ok(languages) => Event::LanguagesLoaded {
                            languages,
                            failed: false,
                        },
                        Err(_) => Event::LanguagesLoaded {
                            languages: vec![],
                            failed: true,
                        },
                    };
                    let _ = tx.send(event);
                });
            }
            Action::ArmDebounce { token, delay } => {
                self.cancel_debounce();
                let tx = self.events_tx.clone();
                self.debounce = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Event::DebounceElapsed { token });
                }));
            }
            Action::CancelDebounce => self.cancel_debounce(),
            Action::Submit { ticket, request } => {
                let gateway = Arc::clone(&self.gateway);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let event = match gateway.submit(&request).await {
                        Ok(request_id) => Event::SubmissionAccepted { ticket, request_id },
                        Err(e) => Event::SubmissionFailed {
                            ticket,
                            message: e.to_string(),
                        },
                    };
                    let _ = tx.send(event);
                });
            }
            Action::AbandonRequest(request_id) => {
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    gateway.abandon(request_id).await;
                });
            }
            Action::ShowToast(text) => {
                self.toasts.show(&text);
            }
            Action::CopyToClipboard(text) => {
                let ok = match self.clipboard.write_text(&text) {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!(error = %e, "clipboard write failed");
                        false
                    }
                };
                let _ = self.events_tx.send(Event::ClipboardWritten { ok });
            }
            Action::Quit => self.quit = true,
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(timer) = self.debounce.take() {
            timer.abort();
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.cancel_debounce();
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("state", &self.state)
            .field("gateway", &self.gateway)
            .field("results_open", &self.results_open)
            .field("quit", &self.quit)
            .finish_non_exhaustive()
    }
}
