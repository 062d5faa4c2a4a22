//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with OpenTelemetry integration,
//! setting up the complete pipeline from `tracing` macros to the span journal.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the span journal inside the data directory.
pub const JOURNAL_FILE: &str = "translaterm-spans.jsonl";

const SERVICE_NAME: &str = "translaterm";

/// Location of the span journal for `config`.
#[must_use]
pub fn journal_path(config: &Config) -> PathBuf {
    config.data_dir().join(JOURNAL_FILE)
}

/// Initializes the tracing subscriber with file-based span export.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans based on the resolved trace level
/// 2. Exports spans to OpenTelemetry
/// 3. Serializes each span to one JSON line
/// 4. Writes to a rotating file with numbered backups
///
/// # Parameters
///
/// * `config` - Application configuration containing `trace_level` and `data_dir`
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if that fails (observability is optional)
/// - Only the first call in a process takes effect
///
/// # Example
///
/// ```rust
/// use translaterm::observability::init_tracing;
/// use translaterm::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: Some(std::env::temp_dir().display().to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = config.data_dir();
    if crate::infrastructure::paths::ensure_dir(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = tracer::create_tracer_provider(journal_path(config), resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry().with(filter).with(otel_layer);

    let _ = subscriber.try_init();
}
