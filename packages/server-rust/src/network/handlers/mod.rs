//! HTTP handler definitions for the `venlink` server.
//!
//! This module defines `AppState` (the shared state carried through axum
//! extractors) and re-exports all handler functions for convenient access
//! when building the router.

pub mod health;
pub mod message;

pub use health::{health_handler, liveness_handler, readiness_handler};
pub use message::{message_handler, TransportMethodError};

use std::sync::Arc;
use std::time::Instant;

use super::ShutdownController;
use crate::service::MessageDispatcher;

/// Shared application state passed to all axum handlers via `State` extraction.
///
/// Holds `Arc` references to shared resources so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Stateless message pipeline shared by every request.
    pub dispatcher: Arc<MessageDispatcher>,
    /// Health state and message accounting.
    pub shutdown: Arc<ShutdownController>,
    /// Server process start time, used for uptime calculation.
    pub start_time: Instant,
}
