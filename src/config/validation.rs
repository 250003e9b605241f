//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs and their schemes
//! - Validate value ranges (delays > 0, caps > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the client

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ClientConfig;

/// Upper bound on `feed.max_entries`.
pub const MAX_FEED_ENTRIES: usize = 10_000;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "reconnect.max_delay_ms").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.connection.page_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "connection.page_url",
            format!("unsupported scheme '{}', expected http or https", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "connection.page_url",
            format!("invalid URL: {}", e),
        )),
    }

    if let Some(endpoint) = &config.connection.endpoint {
        match Url::parse(endpoint) {
            Ok(url) if matches!(url.scheme(), "ws" | "wss") => {}
            Ok(url) => errors.push(ValidationError::new(
                "connection.endpoint",
                format!("unsupported scheme '{}', expected ws or wss", url.scheme()),
            )),
            Err(e) => errors.push(ValidationError::new(
                "connection.endpoint",
                format!("invalid URL: {}", e),
            )),
        }
    }

    let reconnect = &config.reconnect;
    if reconnect.initial_delay_ms == 0 {
        errors.push(ValidationError::new(
            "reconnect.initial_delay_ms",
            "must be greater than 0",
        ));
    }
    if reconnect.max_delay_ms < reconnect.initial_delay_ms {
        errors.push(ValidationError::new(
            "reconnect.max_delay_ms",
            format!(
                "must be at least initial_delay_ms ({})",
                reconnect.initial_delay_ms
            ),
        ));
    }
    if reconnect.max_retries == Some(0) {
        errors.push(ValidationError::new(
            "reconnect.max_retries",
            "must be greater than 0 when set",
        ));
    }

    if config.feed.max_entries == 0 {
        errors.push(ValidationError::new("feed.max_entries", "must be greater than 0"));
    } else if config.feed.max_entries > MAX_FEED_ENTRIES {
        errors.push(ValidationError::new(
            "feed.max_entries",
            format!("must be at most {}", MAX_FEED_ENTRIES),
        ));
    }
    if config.feed.preview_chars == 0 {
        errors.push(ValidationError::new("feed.preview_chars", "must be greater than 0"));
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
