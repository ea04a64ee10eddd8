//! `venlink` Server — HTTP endpoint answering OpenADR VEN callback messages.

pub mod config;
pub mod network;
pub mod service;
pub mod telemetry;
pub mod traits;

pub use config::{LogFormat, ServerArgs};
pub use network::{NetworkConfig, NetworkModule};
pub use service::{MessageDispatcher, OutboundAction};
pub use traits::{EventSink, LoggingEventSink};
