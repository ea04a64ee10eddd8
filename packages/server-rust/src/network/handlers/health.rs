//! Health, liveness, and readiness endpoint handlers.
//!
//! `GET` only. Any other method on these paths is handed to the message
//! endpoint by the router.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::AppState;
use crate::network::HealthState;

/// Lifecycle state, message tally, and the dispatcher's query limit.
///
/// Always 200; `state` tells "up but draining" apart from "ready".
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let tally = state.shutdown.tally();

    Json(json!({
        "state": state.shutdown.health_state().as_str(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "messages": {
            "in_flight": tally.in_flight,
            "answered": tally.answered,
            "rejected": tally.rejected,
            "failed": tally.failed,
        },
        "max_report_intervals": state.dispatcher.max_report_intervals(),
    }))
}

/// Liveness probe -- always returns 200 OK.
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe -- 200 only while messages are being accepted.
pub async fn readiness_handler(State(state): State<AppState>) -> StatusCode {
    match state.shutdown.health_state() {
        HealthState::Ready => StatusCode::OK,
        HealthState::Starting | HealthState::Draining | HealthState::Stopped => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
