//! Wire-compatible message schemas for the VEN callback protocol.
//!
//! Inbound messages share the [`Envelope`] shape and are discriminated by
//! `header.messageType`. Outbound typed responses are a [`ResponseMessage`]:
//! an externally tagged enum whose single key names the response
//! (`onRegisterReportsResponseMessage`, `onQueryIntervalsResponseMessage`).

pub mod base;
pub mod query;
pub mod reports;

use serde::{Deserialize, Serialize};

pub use base::{Envelope, Header, MessageType};
pub use query::{IntervalQuery, QueryIntervalsResponse, Report, ReportInterval};
pub use reports::{
    IntervalDescription, RegisterReportsResponse, ReportDuration, ReportSpecification,
    SamplingPeriod, Units, UsageIntervalProperties,
};

/// Typed response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseMessage {
    OnRegisterReportsResponseMessage(RegisterReportsResponse),
    OnQueryIntervalsResponseMessage(QueryIntervalsResponse),
}
