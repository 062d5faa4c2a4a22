//! Submission phase and theme mode types.
//!
//! # State Machine
//!
//! Every input mutation moves the orchestrator through the submission phases:
//!
//! ```text
//! Idle ──edit──► Debouncing ──timer──► Submitted ──result──► Resolved
//!   ▲                │                     │      └─error──► Failed
//!   └──empty input───┴─────────────────────┴─newer─────────► Superseded
//! ```
//!
//! The phase is informational: correlation itself is driven by the tickets and
//! identifiers held in [`AppState`](crate::app::AppState).

/// Lifecycle of the most recent submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing scheduled or in flight.
    #[default]
    Idle,

    /// A debounce timer is armed for the latest edit.
    Debouncing,

    /// A translation was issued and its result has not arrived yet.
    Submitted,

    /// The authoritative result arrived and was applied.
    Resolved,

    /// An outstanding submission was replaced by a newer one or by empty input.
    Superseded,

    /// Validation, transport, or the backend reported an error.
    Failed,
}

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}
