//! `venlink-server` entry point.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use venlink_server::telemetry::init_tracing;
use venlink_server::{MessageDispatcher, NetworkModule, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    init_tracing(&args.log_level, args.log_format)?;

    let dispatcher =
        Arc::new(MessageDispatcher::json().with_max_report_intervals(args.max_report_intervals));
    let mut network = NetworkModule::new(args.network_config(), dispatcher);
    let port = network.start().await?;
    info!(port, "venlink server is listening");

    network.serve(shutdown_signal()).await
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
