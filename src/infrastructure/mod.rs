//! Infrastructure layer for filesystem, environment, and terminal interactions.
//!
//! # Modules
//!
//! - [`paths`]: Config and data directory lookup, tilde expansion
//! - [`clipboard`]: OSC 52 terminal clipboard and an in-memory stand-in

pub mod clipboard;
pub mod paths;

pub use clipboard::{osc52_sequence, Clipboard, MemoryClipboard, Osc52Clipboard};
pub use paths::{config_dir, data_dir, default_config_path, ensure_dir, expand_tilde};
