//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Element id of the feed container the client writes into.
pub const FEED_ELEMENT_ID: &str = "activity-feed";

/// Element id of the message table body on the messages page.
pub const TABLE_BODY_ELEMENT_ID: &str = "message-table-body";

/// Root configuration for the live feed client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Page and endpoint settings.
    pub connection: ConnectionConfig,

    /// Reconnect backoff settings.
    pub reconnect: ReconnectConfig,

    /// Feed rendering limits.
    pub feed: FeedConfig,

    /// Where rendered entries are written.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// URL of the page hosting the feed (e.g., "http://localhost:8000/").
    /// The socket endpoint is derived from its scheme and host.
    pub page_url: String,

    /// Element ids present on the page.
    pub page_elements: Vec<String>,

    /// Explicit socket endpoint, bypassing derivation from `page_url`.
    pub endpoint: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            page_url: "http://localhost:8000/".to_string(),
            page_elements: vec![
                FEED_ELEMENT_ID.to_string(),
                TABLE_BODY_ELEMENT_ID.to_string(),
            ],
            endpoint: None,
        }
    }
}

/// Reconnect configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReconnectConfig {
    /// Delay before the first reconnect, and the value restored on open.
    pub initial_delay_ms: u64,

    /// Ceiling for the doubled delay.
    pub max_delay_ms: u64,

    /// Consecutive failed attempts after which the client gives up.
    /// Unbounded when absent.
    pub max_retries: Option<u32>,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 1000,
            max_delay_ms: 30_000,
            max_retries: None,
        }
    }
}

/// Feed configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Maximum number of live entries in the feed container.
    pub max_entries: usize,

    /// Number of content characters shown for a chat message.
    pub preview_chars: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_entries: 50,
            preview_chars: 100,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print each new entry to stdout.
    pub print_entries: bool,

    /// Rewrite this HTML file with the whole feed after every update.
    pub snapshot_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            print_entries: true,
            snapshot_path: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.reconnect.initial_delay_ms, 1000);
        assert_eq!(config.reconnect.max_delay_ms, 30_000);
        assert_eq!(config.reconnect.max_retries, None);
        assert_eq!(config.feed.max_entries, 50);
        assert_eq!(config.feed.preview_chars, 100);
        assert!(config
            .connection
            .page_elements
            .iter()
            .any(|id| id == FEED_ELEMENT_ID));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [reconnect]
            max_retries = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.reconnect.max_retries, Some(5));
        assert_eq!(config.reconnect.initial_delay_ms, 1000);
        assert_eq!(config.connection.page_url, "http://localhost:8000/");
    }
}
