//! Live feed client.
//!
//! # Architecture Overview
//!
//! ```text
//!   Dashboard server                    live-feed
//!  ┌──────────────┐   JSON frames   ┌────────────────────────────────────────────┐
//!  │  /ws socket  │────────────────▶│ client::runner                             │
//!  └──────────────┘                 │   │   ▲                                    │
//!                                   │   │   └── resilience::backoff (on close)   │
//!                                   │   ▼                                        │
//!                                   │ feed::event → feed::render → feed::container
//!                                   │                                   │        │
//!                                   │                          feed::sink ──────┼──▶ stdout / snapshot
//!                                   └────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use live_feed::client::RunOutcome;
use live_feed::config::ClientConfig;
use live_feed::lifecycle::{build_client, resolve_config, signals, Shutdown};
use live_feed::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "live-feed")]
#[command(about = "Follow a dashboard's live activity feed", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL of the page hosting the feed; the socket endpoint is derived from it
    #[arg(short, long)]
    page_url: Option<String>,

    /// Give up after this many consecutive failed connection attempts
    #[arg(long)]
    max_retries: Option<u32>,

    /// Rewrite this HTML file with the feed after every update
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Do not print entries to stdout
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn apply(&self, config: &mut ClientConfig) {
        if let Some(page_url) = &self.page_url {
            config.connection.page_url = page_url.clone();
        }
        if let Some(max_retries) = self.max_retries {
            config.reconnect.max_retries = Some(max_retries);
        }
        if let Some(snapshot) = &self.snapshot {
            config.output.snapshot_path = Some(snapshot.display().to_string());
        }
        if self.quiet {
            config.output.print_entries = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), |config| cli.apply(config))?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!("live-feed v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        page_url = %config.connection.page_url,
        max_retries = ?config.reconnect.max_retries,
        max_entries = config.feed.max_entries,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let mut client = build_client(&config)?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    match client.run(shutdown.subscribe()).await {
        RunOutcome::Inert => tracing::info!("Nothing to follow on this page"),
        RunOutcome::GivenUp => tracing::warn!("Live updates stopped; refresh the page to resume"),
        RunOutcome::Shutdown => tracing::info!("Shutdown complete"),
    }

    Ok(())
}
