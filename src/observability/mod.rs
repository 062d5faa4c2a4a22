//! OpenTelemetry-based observability with a file-based span journal.
//!
//! Spans produced by the `tracing` macros are exported through OpenTelemetry
//! and written to a JSON-lines file for offline inspection. Nothing is ever
//! printed to the terminal the UI draws on.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Spans written to `<data_dir>/translaterm-spans.jsonl`
//! - **Automatic Rotation**: Files rotate at 1 MiB with 3 numbered backups
//! - **One Span Per Line**: RFC 3339 timestamps, attributes as a JSON object
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file or `--trace-level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: Span to JSON line serialization
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, journal_path, JOURNAL_FILE};
