//! Client error definitions.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors deriving the socket endpoint.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// URL failed to parse.
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),

    /// Scheme has no socket counterpart, or an override is not ws/wss.
    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    /// URL has no host to connect to.
    #[error("URL has no host")]
    MissingHost,
}

/// Errors that prevent the client from starting.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("endpoint error: {0}")]
    Endpoint(#[from] EndpointError),
}

/// Result type for client setup.
pub type ClientResult<T> = Result<T, ClientError>;
