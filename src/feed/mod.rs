//! Feed subsystem.
//!
//! # Data Flow
//! ```text
//! text frame
//!     → event.rs (decode JSON into FeedEvent)
//!     → render.rs (escaped HTML fragment, or nothing)
//!     → container.rs (prepend to the page's feed, evict past the cap)
//!     → sink.rs (stdout / snapshot file / channel)
//! ```
//!
//! # Design Decisions
//! - Events are decoded once at the boundary into a closed enum
//! - Escaping is a plain substitution table, independent of any renderer
//! - The feed is bounded; memory does not grow with uptime

pub mod container;
pub mod event;
pub mod render;
pub mod sink;

pub use container::{Feed, FeedEntry, Page};
pub use event::{decode_frame, DecodeError, FeedEvent, RunId};
pub use render::{escape_html, render_event, RenderOptions};
pub use sink::{ChannelSink, FeedSink, SnapshotSink, StdoutSink};
