//! OS signal handling.
//!
//! Ctrl-C (SIGINT) triggers the shutdown flag; a second Ctrl-C exits at once.

use crate::lifecycle::shutdown::Shutdown;

/// Spawn a task that turns Ctrl-C into a shutdown.
pub fn spawn_signal_handler(shutdown: Shutdown) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            return;
        }
        tracing::info!("Interrupt received, shutting down");
        shutdown.trigger();

        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Second interrupt, exiting immediately");
            std::process::exit(130);
        }
    });
}
