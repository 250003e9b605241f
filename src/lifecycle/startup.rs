//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration and apply command-line overrides
//! - Resolve the socket endpoint
//! - Build the page model from the configured element ids
//! - Attach the configured output sinks
//!
//! # Design Decisions
//! - Fail fast: a bad endpoint is fatal before any connection is tried

use std::path::Path;

use crate::client::{resolve_endpoint, ClientResult, LiveFeedClient};
use crate::config::validation::validate_config;
use crate::config::{load_config, ClientConfig, ConfigError};
use crate::feed::{Page, RenderOptions, SnapshotSink, StdoutSink};
use crate::resilience::ReconnectState;

/// Load the config file (or defaults), apply overrides, then validate the result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: impl FnOnce(&mut ClientConfig),
) -> ClientResult<ClientConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Assemble a client from validated configuration.
pub fn build_client(config: &ClientConfig) -> ClientResult<LiveFeedClient> {
    let endpoint = resolve_endpoint(
        &config.connection.page_url,
        config.connection.endpoint.as_deref(),
    )?;

    let page = Page::new(
        config.connection.page_elements.iter().cloned(),
        config.feed.max_entries,
    );

    let mut client = LiveFeedClient::new(
        endpoint,
        page,
        ReconnectState::from_config(&config.reconnect),
        RenderOptions::from_config(&config.feed),
    );

    if config.output.print_entries {
        client = client.with_sink(StdoutSink);
    }
    if let Some(path) = &config.output.snapshot_path {
        client = client.with_sink(SnapshotSink::new(path));
    }

    tracing::debug!(
        endpoint = %client.endpoint(),
        live = client.page().is_live_feed_page(),
        "Client assembled"
    );
    Ok(client)
}
