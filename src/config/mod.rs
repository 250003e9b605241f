//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → CLI flags applied on top by the binary
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the client starts
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ClientConfig;
pub use schema::ConnectionConfig;
pub use schema::FeedConfig;
pub use schema::ObservabilityConfig;
pub use schema::OutputConfig;
pub use schema::ReconnectConfig;
