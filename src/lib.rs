//! Live feed client library.
//!
//! Keeps a dashboard page's activity feed live from the server's event
//! socket: reconnects with capped exponential backoff, decodes JSON event
//! notifications, and renders them as escaped HTML entries in a bounded feed.

pub mod client;
pub mod config;
pub mod feed;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use client::{LiveFeedClient, RunOutcome};
pub use config::schema::ClientConfig;
pub use feed::{FeedEvent, Page};
pub use lifecycle::Shutdown;
