//! Clipboard access.
//!
//! The terminal front-end copies through the OSC 52 escape sequence: the text
//! is base64-encoded and written to the terminal, which places it on the system
//! clipboard. This works over SSH and inside multiplexers that forward OSC 52,
//! and needs no platform clipboard library.

use crate::domain::error::{Result, TranslatorError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Destination for copied text.
pub trait Clipboard: Send + Sync {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError::Clipboard`] if the write fails.
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Builds the OSC 52 sequence that sets the clipboard selection to `text`.
///
/// # Example
///
/// ```
/// use translaterm::infrastructure::osc52_sequence;
///
/// assert_eq!(osc52_sequence("hola"), "\u{1b}]52;c;aG9sYQ==\u{7}");
/// ```
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\u{1b}]52;c;{}\u{7}", STANDARD.encode(text.as_bytes()))
}

/// Clipboard that writes OSC 52 sequences to a terminal stream.
pub struct Osc52Clipboard<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Consumes the clipboard and returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    /// Clipboard writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| TranslatorError::Clipboard(e.to_string()))?;

        tracing::debug!(text_len = text.len(), "copied to clipboard");
        Ok(())
    }
}

/// In-memory clipboard, useful where no terminal is attached.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}
