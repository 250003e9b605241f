//! Live feed client subsystem.
//!
//! # Data Flow
//! ```text
//! page URL
//!     → endpoint.rs (ws/wss endpoint on the page's host)
//!     → runner.rs (connect, read frames, reconnect with backoff)
//!     → feed subsystem (decode, render, cap)
//! ```
//!
//! # Design Decisions
//! - Single task, single connection at a time; no locks
//! - Transport errors are logged; the close that follows drives the retry
//! - Backoff state is owned by the client, not shared

pub mod endpoint;
pub mod error;
pub mod runner;
pub mod tls;

pub use endpoint::{endpoint_for_page, parse_endpoint, resolve_endpoint};
pub use error::{ClientError, ClientResult, EndpointError};
pub use runner::{LiveFeedClient, Phase, RunOutcome};
