//! Interval query types for `OnQueryIntervals` and its response.

use serde::{Deserialize, Serialize};

use crate::intervals::{self, ReportIntervals};

/// Payload of `onQueryIntervalsMessage`.
///
/// Times are epoch seconds. `granularityInSeconds` is unsigned, so negative
/// or fractional granularities are rejected when the payload is parsed.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalQuery {
    pub start_timet: i64,
    pub end_timet: i64,
    pub granularity_in_seconds: u64,
    pub r_ids: Vec<String>,
}

impl IntervalQuery {
    /// Lazily generates the report intervals answering this query.
    #[must_use]
    pub fn intervals(&self) -> ReportIntervals<'_> {
        intervals::generate(
            self.start_timet,
            self.end_timet,
            self.granularity_in_seconds,
            &self.r_ids,
        )
    }

    /// Number of intervals [`Self::intervals`] yields, computed without
    /// generating them. Saturates at `u64::MAX`.
    #[must_use]
    pub fn interval_rows(&self) -> u64 {
        let slots = intervals::interval_count(
            self.start_timet,
            self.end_timet,
            self.granularity_in_seconds,
        );
        let width = u64::try_from(self.r_ids.len()).unwrap_or(u64::MAX);
        slots.saturating_mul(width)
    }
}

/// One reported reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInterval {
    pub data_quality: String,
    pub dt_start_timet: i64,
    pub r_id: String,
    pub value: i64,
}

/// A group of intervals within a query response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub report_intervals: Vec<ReportInterval>,
}

/// Body of `onQueryIntervalsResponseMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryIntervalsResponse {
    pub reports: Vec<Report>,
}
