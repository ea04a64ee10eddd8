use serde_json::Value;
use tracing::{info, warn};

/// Receiver for event-lifecycle notifications from the VTN.
///
/// This is where a deployment hooks its scheduling logic. Implementations
/// are called synchronously on the request path and must not block; the
/// acknowledgment sent back to the VTN is a 200 whatever the sink does.
/// The payload is `None` when the envelope carried no payload field.
pub trait EventSink: Send + Sync {
    /// An event interval has started (`OnEventIntervalStart`).
    fn event_interval_start(&self, payload: Option<&Value>);

    /// An event has completed (`OnEventComplete`).
    fn event_complete(&self, payload: Option<&Value>);

    /// The VTN reported an error (`OnError`).
    fn error_reported(&self, payload: Option<&Value>);
}

/// Default sink: records each notification in the log and retains nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventSink;

impl EventSink for LoggingEventSink {
    fn event_interval_start(&self, payload: Option<&Value>) {
        info!(payload = %display_payload(payload), "event interval started");
    }

    fn event_complete(&self, payload: Option<&Value>) {
        info!(payload = %display_payload(payload), "event completed");
    }

    fn error_reported(&self, payload: Option<&Value>) {
        warn!(label = "error", payload = %display_payload(payload), "error message");
    }
}

fn display_payload(payload: Option<&Value>) -> String {
    payload.map_or_else(|| "<none>".to_string(), Value::to_string)
}
