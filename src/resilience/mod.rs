//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Connection closed:
//!     → backoff.rs (count the failure, pick the next delay or give up)
//!     → client sleeps, then opens a new connection
//! Connection opened:
//!     → backoff.rs (reset delay and failure count)
//! ```
//!
//! # Design Decisions
//! - No jitter: a single client per page, so delays are deterministic
//! - Retry ceiling is optional; unbounded unless configured

pub mod backoff;

pub use backoff::{Reconnect, ReconnectState};
