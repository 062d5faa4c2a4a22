//! Domain layer for translaterm.
//!
//! This module contains the core domain types, independent of the backend
//! transport, the terminal, or the async runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`language`]: Language model and lookup
//! - [`translation`]: Request/response models and input validation
//!
//! # Examples
//!
//! ```
//! use translaterm::domain::{Result, TranslationRequest, MAX_CHARS};
//!
//! fn build() -> Result<TranslationRequest> {
//!     let request = TranslationRequest::new("hello", "en", "es");
//!     request.validate(MAX_CHARS)?;
//!     Ok(request)
//! }
//! # build().unwrap();
//! ```

pub mod error;
pub mod language;
pub mod translation;

pub use error::{Result, TranslatorError, ValidationError, LANGUAGES_FAILED, TRANSLATION_FAILED};
pub use language::{dedup_by_code, resolve_language, Language};
pub use translation::{char_count_label, TranslationRequest, TranslationResponse, MAX_CHARS};
