//! Report interval generation for `OnQueryIntervals`.
//!
//! The number of time slots `n` for a window `[start, end]` stepped by
//! `granularity` seconds is:
//!
//! - `1` when `granularity == 0` or `end == start`
//! - `0` when `end < start`
//! - `1 + floor((end - start) / granularity)` otherwise
//!
//! Intervals are emitted slot by slot in ascending time, and within a slot
//! in the caller's resource order, so the sequence has exactly
//! `n * r_ids.len()` items. Readings are placeholders with value `0`.

use std::iter::FusedIterator;

use crate::messages::ReportInterval;

/// Data-quality marker attached to every generated interval.
pub const DATA_QUALITY_GOOD: &str = "Quality Good - Non Specific";

/// Number of time slots covering `[start, end]` at the given granularity.
#[must_use]
pub fn interval_count(start: i64, end: i64, granularity: u64) -> u64 {
    let span = i128::from(end) - i128::from(start);
    if granularity == 0 || span == 0 {
        return 1;
    }
    if span < 0 {
        return 0;
    }
    let slots = 1 + span / i128::from(granularity);
    u64::try_from(slots).unwrap_or(u64::MAX)
}

/// Returns a lazy iterator over the intervals for the given window.
///
/// The iterator borrows `r_ids` and is `Clone`, so it can be restarted from
/// any point without recomputation.
#[must_use]
pub fn generate(start: i64, end: i64, granularity: u64, r_ids: &[String]) -> ReportIntervals<'_> {
    let slots = interval_count(start, end, granularity);
    let total = u128::from(slots) * r_ids.len() as u128;
    ReportIntervals {
        start,
        granularity,
        r_ids,
        position: 0,
        total: u64::try_from(total).unwrap_or(u64::MAX),
    }
}

/// Iterator returned by [`generate`].
#[derive(Debug, Clone)]
pub struct ReportIntervals<'a> {
    start: i64,
    granularity: u64,
    r_ids: &'a [String],
    position: u64,
    total: u64,
}

impl ReportIntervals<'_> {
    /// Start timestamp of the given slot, saturating at the `i64` bounds.
    fn slot_start(&self, slot: u64) -> i64 {
        let offset = i128::from(slot) * i128::from(self.granularity);
        let at = i128::from(self.start) + offset;
        i64::try_from(at).unwrap_or(i64::MAX)
    }
}

impl Iterator for ReportIntervals<'_> {
    type Item = ReportInterval;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.total {
            return None;
        }
        // total > 0 implies r_ids is non-empty.
        let width = self.r_ids.len() as u64;
        let slot = self.position / width;
        let index = usize::try_from(self.position % width).ok()?;
        self.position += 1;

        Some(ReportInterval {
            data_quality: DATA_QUALITY_GOOD.to_string(),
            dt_start_timet: self.slot_start(slot),
            r_id: self.r_ids[index].clone(),
            value: 0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.position;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for ReportIntervals<'_> {}
