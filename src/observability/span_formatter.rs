//! JSON-lines span formatter.
//!
//! Each finished span becomes one self-contained JSON object, which keeps the
//! journal greppable and lets `jq` read it line by line:
//!
//! ```json
//! {"service":"translaterm","name":"handle_event","start":"2026-01-02T10:00:00.000120Z",
//!  "end":"2026-01-02T10:00:00.000480Z","duration_us":360,"trace_id":"…","span_id":"…",
//!  "parent_span_id":"","attributes":{"event_type":"text_changed"},"events":[],
//!  "status":"unset"}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{Key, KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Map, Value as JsonValue};
use std::time::SystemTime;

const SERVICE_NAME_KEY: &str = "service.name";

/// Formats spans as JSON lines tagged with the service name.
pub struct SpanFormatter {
    service: String,
}

impl SpanFormatter {
    /// Creates a formatter reading `service.name` from `resource`.
    pub fn new(resource: &Resource) -> Self {
        let service = resource
            .get(Key::from_static_str(SERVICE_NAME_KEY))
            .map_or_else(|| "unknown".to_string(), |v| v.as_str().into_owned());
        Self { service }
    }

    /// Formats one span as a single JSON object.
    pub fn format_span(&self, span: &SpanData) -> JsonValue {
        let duration_us = span
            .end_time
            .duration_since(span.start_time)
            .map_or(0, |d| d.as_micros());

        let parent_span_id = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };

        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                json!({
                    "time": rfc3339(event.timestamp),
                    "name": event.name,
                    "attributes": attributes_to_json(&event.attributes),
                })
            })
            .collect();

        let (status, status_message) = match &span.status {
            Status::Unset => ("unset", String::new()),
            Status::Ok => ("ok", String::new()),
            Status::Error { description } => ("error", description.to_string()),
        };

        json!({
            "service": self.service,
            "name": span.name,
            "start": rfc3339(span.start_time),
            "end": rfc3339(span.end_time),
            "duration_us": duration_us,
            "trace_id": format!("{:032x}", span.span_context.trace_id()),
            "span_id": format!("{:016x}", span.span_context.span_id()),
            "parent_span_id": parent_span_id,
            "attributes": attributes_to_json(&span.attributes),
            "events": events,
            "status": status,
            "status_message": status_message,
        })
    }
}

/// RFC 3339 UTC timestamp with microsecond precision.
fn rfc3339(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn attributes_to_json(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), value_to_json(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("service", &self.service)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let time = UNIX_EPOCH + Duration::from_micros(1_500_000);
        assert_eq!(rfc3339(time), "1970-01-01T00:00:01.500000Z");
    }

    #[test]
    fn attributes_keep_their_json_types() {
        let attributes = vec![
            KeyValue::new("event_type", "text_changed"),
            KeyValue::new("action_count", 2_i64),
            KeyValue::new("should_render", true),
        ];
        assert_eq!(
            attributes_to_json(&attributes),
            json!({"event_type": "text_changed", "action_count": 2, "should_render": true})
        );
    }

    #[test]
    fn service_name_comes_from_resource() {
        let resource = Resource::new(vec![KeyValue::new(SERVICE_NAME_KEY, "translaterm")]);
        assert_eq!(SpanFormatter::new(&resource).service, "translaterm");
    }
}
