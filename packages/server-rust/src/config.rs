//! Command-line and environment configuration for the server binary.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::network::NetworkConfig;
use crate::service::DEFAULT_MAX_REPORT_INTERVALS;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable lines.
    Pretty,
}

/// OpenADR VEN callback endpoint.
#[derive(Debug, Clone, Parser)]
#[command(name = "venlink-server", version, about)]
pub struct ServerArgs {
    /// Address to bind.
    #[arg(long, env = "VENLINK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (0 picks a free port).
    #[arg(long, env = "VENLINK_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Per-request timeout in seconds.
    #[arg(long, env = "VENLINK_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Largest accepted request body in bytes.
    #[arg(long, env = "VENLINK_MAX_BODY_BYTES", default_value_t = 1_048_576)]
    pub max_body_bytes: usize,

    /// Seconds to wait for in-flight requests on shutdown.
    #[arg(long, env = "VENLINK_DRAIN_TIMEOUT_SECS", default_value_t = 30)]
    pub drain_timeout_secs: u64,

    /// Most report intervals one `OnQueryIntervals` may ask for.
    #[arg(long, env = "VENLINK_MAX_REPORT_INTERVALS", default_value_t = DEFAULT_MAX_REPORT_INTERVALS)]
    pub max_report_intervals: u64,

    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, env = "VENLINK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "VENLINK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl ServerArgs {
    #[must_use]
    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig {
            host: self.host.clone(),
            port: self.port,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_body_bytes: self.max_body_bytes,
            drain_timeout: Duration::from_secs(self.drain_timeout_secs),
        }
    }
}
