//! Message dispatch: routes a decoded envelope to its response builder.

use std::sync::Arc;

use tracing::{error, info};
use venlink_core::messages::IntervalQuery;
use venlink_core::{Envelope, EnvelopeCodec, JsonCodec, MessageType};

use super::action::{DispatchError, HandlerFault, OutboundAction, Reply};
use super::builders;
use crate::traits::{EventSink, LoggingEventSink};

/// Largest number of report intervals a single `OnQueryIntervals` may ask
/// for unless configured otherwise.
pub const DEFAULT_MAX_REPORT_INTERVALS: u64 = 100_000;

/// Decodes, routes and encodes VEN callback messages.
///
/// Holds no mutable state, so a single instance is shared across all
/// request tasks behind an `Arc`.
pub struct MessageDispatcher<C = JsonCodec> {
    codec: C,
    events: Arc<dyn EventSink>,
    max_report_intervals: u64,
}

impl MessageDispatcher<JsonCodec> {
    /// JSON codec with the logging event sink.
    #[must_use]
    pub fn json() -> Self {
        Self::new(JsonCodec, Arc::new(LoggingEventSink))
    }
}

impl Default for MessageDispatcher<JsonCodec> {
    fn default() -> Self {
        Self::json()
    }
}

impl<C: EnvelopeCodec> MessageDispatcher<C> {
    #[must_use]
    pub fn new(codec: C, events: Arc<dyn EventSink>) -> Self {
        Self {
            codec,
            events,
            max_report_intervals: DEFAULT_MAX_REPORT_INTERVALS,
        }
    }

    /// Caps the intervals one query may produce. Larger queries are answered
    /// with a 500 before anything is generated.
    #[must_use]
    pub fn with_max_report_intervals(mut self, limit: u64) -> Self {
        self.max_report_intervals = limit;
        self
    }

    #[must_use]
    pub fn max_report_intervals(&self) -> u64 {
        self.max_report_intervals
    }

    /// Runs the full pipeline on a raw request body.
    ///
    /// Never fails: every error is turned into a status code and a short
    /// plain-text body.
    pub fn handle(&self, body: &[u8]) -> OutboundAction {
        match self.codec.decode(body) {
            Ok(envelope) => self.dispatch(&envelope),
            Err(err) => {
                error!(error = %err, bytes = body.len(), "failed to decode envelope");
                DispatchError::from(err).into()
            }
        }
    }

    /// Routes an already-decoded envelope.
    pub fn dispatch(&self, envelope: &Envelope) -> OutboundAction {
        match self.route(envelope).and_then(|reply| self.render(reply)) {
            Ok(action) => action,
            Err(DispatchError::UnsupportedMessageType(name)) => {
                info!(message_type = %name, "message received, not handled");
                DispatchError::UnsupportedMessageType(name).into()
            }
            Err(err) => {
                error!(
                    message_type = %envelope.message_type(),
                    error = %err,
                    "failed to handle message"
                );
                err.into()
            }
        }
    }

    fn route(&self, envelope: &Envelope) -> Result<Reply, DispatchError> {
        let message_type = envelope.message_type();
        if message_type.is_recognized() {
            info!(message_type = %message_type, "message received");
        }

        match message_type {
            MessageType::OnRegisterReports => Ok(Reply::Message(builders::register_reports())),
            MessageType::OnQueryIntervals => {
                let query: IntervalQuery =
                    envelope.parse_payload().map_err(HandlerFault::from)?;
                let requested = query.interval_rows();
                if requested > self.max_report_intervals {
                    return Err(HandlerFault::TooManyIntervals {
                        requested,
                        limit: self.max_report_intervals,
                    }
                    .into());
                }
                Ok(Reply::Message(builders::query_intervals(&query)))
            }
            MessageType::OnEventIntervalStart => {
                builders::event_interval_start(self.events.as_ref(), envelope.payload());
                Ok(Reply::Ack)
            }
            MessageType::OnEventComplete => {
                builders::event_complete(self.events.as_ref(), envelope.payload());
                Ok(Reply::Ack)
            }
            MessageType::OnError => {
                builders::error_ack(self.events.as_ref(), envelope.payload());
                Ok(Reply::Ack)
            }
            MessageType::Unrecognized(name) => {
                Err(DispatchError::UnsupportedMessageType(name.clone()))
            }
        }
    }

    fn render(&self, reply: Reply) -> Result<OutboundAction, DispatchError> {
        match reply {
            Reply::Ack => Ok(OutboundAction::ack()),
            Reply::Message(message) => {
                let bytes = self.codec.encode(&message).map_err(HandlerFault::from)?;
                Ok(OutboundAction::json(self.codec.content_type(), bytes))
            }
        }
    }
}

impl<C> std::fmt::Debug for MessageDispatcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageDispatcher")
            .field("max_report_intervals", &self.max_report_intervals)
            .finish_non_exhaustive()
    }
}
