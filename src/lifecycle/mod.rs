//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Page + sinks + endpoint → LiveFeedClient
//!
//! Shutdown (shutdown.rs):
//!     Trigger → client loop leaves its current wait → run() returns
//!
//! Signals (signals.rs):
//!     SIGINT → Trigger shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownListener};
pub use startup::{build_client, resolve_config};
