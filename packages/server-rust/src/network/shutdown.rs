//! Endpoint lifecycle: health state, in-flight VEN messages, and a tally of
//! how each message was answered.
//!
//! A message is admitted with [`ShutdownController::admit_message`] and
//! settled with the status it was answered with. The guard settles itself
//! as a failure if it is dropped unsettled, which is what happens when a
//! builder or event sink panics and the catch-panic layer answers 500.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use http::StatusCode;

/// Server health state.
///
/// State machine: Starting -> Ready -> Draining -> Stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    /// Listener not yet serving.
    Starting,
    /// Accepting and answering messages.
    Ready,
    /// Shutdown signalled; finishing in-flight messages.
    Draining,
    /// All in-flight messages completed.
    Stopped,
}

impl HealthState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Ready => "ready",
            Self::Draining => "draining",
            Self::Stopped => "stopped",
        }
    }
}

#[derive(Debug, Default)]
struct MessageCounters {
    in_flight: AtomicU64,
    answered: AtomicU64,
    rejected: AtomicU64,
    failed: AtomicU64,
}

/// Snapshot of the message counters.
///
/// `answered` counts 2xx responses, `rejected` 4xx (wrong method, unsupported
/// type, oversized body) and `failed` everything else, panics included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageTally {
    pub in_flight: u64,
    pub answered: u64,
    pub rejected: u64,
    pub failed: u64,
}

/// Coordinates readiness reporting, message accounting, and draining.
#[derive(Debug)]
pub struct ShutdownController {
    health_state: ArcSwap<HealthState>,
    messages: Arc<MessageCounters>,
}

impl ShutdownController {
    /// Creates a new controller in the `Starting` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            health_state: ArcSwap::from_pointee(HealthState::Starting),
            messages: Arc::new(MessageCounters::default()),
        }
    }

    pub fn set_ready(&self) {
        self.health_state.store(Arc::new(HealthState::Ready));
    }

    /// Moves to `Draining`. Readiness probes fail from here on.
    pub fn trigger_shutdown(&self) {
        self.health_state.store(Arc::new(HealthState::Draining));
    }

    #[must_use]
    pub fn health_state(&self) -> HealthState {
        **self.health_state.load()
    }

    /// Counts one message as in flight until the returned guard is settled
    /// or dropped.
    #[must_use]
    pub fn admit_message(&self) -> MessageGuard {
        self.messages.in_flight.fetch_add(1, Ordering::Relaxed);
        MessageGuard {
            messages: Arc::clone(&self.messages),
            settled: false,
        }
    }

    #[must_use]
    pub fn in_flight_count(&self) -> u64 {
        self.messages.in_flight.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn tally(&self) -> MessageTally {
        MessageTally {
            in_flight: self.messages.in_flight.load(Ordering::Relaxed),
            answered: self.messages.answered.load(Ordering::Relaxed),
            rejected: self.messages.rejected.load(Ordering::Relaxed),
            failed: self.messages.failed.load(Ordering::Relaxed),
        }
    }

    /// Waits for in-flight messages to settle, up to `timeout`.
    ///
    /// Returns `true` and moves to `Stopped` on success; returns `false` and
    /// stays `Draining` if the timeout expires first.
    pub async fn wait_for_drain(&self, timeout: Duration) -> bool {
        let drained = tokio::time::timeout(timeout, async {
            while self.in_flight_count() > 0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .is_ok();

        if drained {
            self.health_state.store(Arc::new(HealthState::Stopped));
        }
        drained
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// One admitted message. Leaves the in-flight count when dropped.
#[derive(Debug)]
pub struct MessageGuard {
    messages: Arc<MessageCounters>,
    settled: bool,
}

impl MessageGuard {
    /// Records the status the message was answered with.
    pub fn settle(mut self, status: StatusCode) {
        self.record(status);
    }

    fn record(&mut self, status: StatusCode) {
        let counter = if status.is_success() {
            &self.messages.answered
        } else if status.is_client_error() {
            &self.messages.rejected
        } else {
            &self.messages.failed
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.settled = true;
    }
}

impl Drop for MessageGuard {
    fn drop(&mut self) {
        if !self.settled {
            self.record(StatusCode::INTERNAL_SERVER_ERROR);
        }
        self.messages.in_flight.fetch_sub(1, Ordering::Relaxed);
    }
}
