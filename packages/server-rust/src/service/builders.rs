//! Response builders, one per recognized message type.

use serde_json::Value;
use tracing::debug;
use venlink_core::catalog;
use venlink_core::messages::{
    IntervalQuery, QueryIntervalsResponse, RegisterReportsResponse, Report, ResponseMessage,
};

use crate::traits::EventSink;

/// Advertises the static telemetry report catalog. Ignores the request payload.
#[must_use]
pub fn register_reports() -> ResponseMessage {
    ResponseMessage::OnRegisterReportsResponseMessage(RegisterReportsResponse {
        telemetry_reports: catalog::telemetry_reports().to_vec(),
    })
}

/// Answers an interval query with a single report group.
#[must_use]
pub fn query_intervals(query: &IntervalQuery) -> ResponseMessage {
    let report_intervals: Vec<_> = query.intervals().collect();
    debug!(
        start = query.start_timet,
        end = query.end_timet,
        granularity = query.granularity_in_seconds,
        resources = query.r_ids.len(),
        intervals = report_intervals.len(),
        "generated report intervals"
    );
    ResponseMessage::OnQueryIntervalsResponseMessage(QueryIntervalsResponse {
        reports: vec![Report { report_intervals }],
    })
}

pub fn event_interval_start(sink: &dyn EventSink, payload: Option<&Value>) {
    sink.event_interval_start(payload);
}

pub fn event_complete(sink: &dyn EventSink, payload: Option<&Value>) {
    sink.event_complete(payload);
}

/// `OnError` acknowledgment.
pub fn error_ack(sink: &dyn EventSink, payload: Option<&Value>) {
    sink.error_reported(payload);
}
