//! The live feed client loop.
//!
//! # States (per connection attempt)
//! ```text
//! Idle → Connecting → Open → Closed
//!                   ↘ (handshake error) → Closed
//! Closed → Idle after the backoff delay
//! Closed → GivenUp once the retry ceiling is reached (terminal)
//! ```
//!
//! At most one connection exists at a time: a new attempt starts only after
//! the previous one has closed.

use futures_util::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

use crate::client::tls;
use crate::feed::{decode_frame, render_event, FeedEntry, FeedEvent, FeedSink, Page, RenderOptions};
use crate::lifecycle::ShutdownListener;
use crate::observability::metrics;
use crate::resilience::{Reconnect, ReconnectState};

/// Where the client is in its connection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Connecting,
    Open,
    Closed,
    GivenUp,
}

/// Why [`LiveFeedClient::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The page has no feed or table body; nothing was started.
    Inert,
    /// The retry ceiling was reached.
    GivenUp,
    /// Shutdown was triggered.
    Shutdown,
}

/// Keeps one page's feed live from the server's event socket.
pub struct LiveFeedClient {
    endpoint: Url,
    page: Page,
    reconnect: ReconnectState,
    render: RenderOptions,
    sinks: Vec<Box<dyn FeedSink>>,
    phase: Phase,
    attempts: u64,
}

impl LiveFeedClient {
    pub fn new(endpoint: Url, page: Page, reconnect: ReconnectState, render: RenderOptions) -> Self {
        Self {
            endpoint,
            page,
            reconnect,
            render,
            sinks: Vec::new(),
            phase: Phase::Idle,
            attempts: 0,
        }
    }

    /// Add an output notified after every new entry.
    pub fn with_sink(mut self, sink: impl FeedSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Connection attempts made so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn reconnect_state(&self) -> &ReconnectState {
        &self.reconnect
    }

    /// Connect, and keep reconnecting, until shutdown or give-up.
    pub async fn run(&mut self, mut shutdown: ShutdownListener) -> RunOutcome {
        if !self.page.is_live_feed_page() {
            tracing::info!("Page has no live feed elements, client inactive");
            return RunOutcome::Inert;
        }

        if self.endpoint.scheme() == "wss" {
            tls::install_crypto_provider();
        }
        tracing::info!(endpoint = %self.endpoint, "Live feed client starting");

        loop {
            if !self.reconnect.may_connect() {
                self.phase = Phase::GivenUp;
                return RunOutcome::GivenUp;
            }

            tokio::select! {
                _ = self.session() => {}
                _ = shutdown.wait() => {
                    self.phase = Phase::Closed;
                    tracing::info!("Shutdown requested, closing connection");
                    return RunOutcome::Shutdown;
                }
            }

            self.phase = Phase::Closed;
            metrics::record_disconnected();

            match self.reconnect.on_close() {
                Reconnect::After(delay) => {
                    tracing::info!(
                        delay_ms = delay.as_millis() as u64,
                        retries = self.reconnect.retries(),
                        "Disconnected, reconnecting"
                    );
                    self.phase = Phase::Idle;
                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {}
                        _ = shutdown.wait() => {
                            tracing::info!("Shutdown requested while waiting to reconnect");
                            return RunOutcome::Shutdown;
                        }
                    }
                }
                Reconnect::GiveUp => {
                    tracing::error!(
                        retries = self.reconnect.retries(),
                        "Retry limit reached, giving up on live updates"
                    );
                    self.phase = Phase::GivenUp;
                    return RunOutcome::GivenUp;
                }
            }
        }
    }

    /// One connection attempt, from handshake to close.
    async fn session(&mut self) {
        self.phase = Phase::Connecting;
        self.attempts += 1;
        tracing::debug!(endpoint = %self.endpoint, attempt = self.attempts, "Connecting");

        let mut stream = match connect_async(self.endpoint.as_str()).await {
            Ok((stream, _response)) => stream,
            Err(e) => {
                tracing::warn!(error = %e, "WebSocket error");
                return;
            }
        };

        self.phase = Phase::Open;
        self.reconnect.on_open();
        metrics::record_connected();
        tracing::info!(endpoint = %self.endpoint, "Connected");

        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    self.handle_frame(text.as_str());
                }
                Ok(Message::Close(frame)) => {
                    tracing::debug!(?frame, "Server closed connection");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "WebSocket error");
                    break;
                }
            }
        }
    }

    /// Decode and apply one text frame. Malformed frames are logged and dropped.
    /// Returns whether the feed changed.
    pub fn handle_frame(&mut self, text: &str) -> bool {
        match decode_frame(text) {
            Ok(event) => self.handle_event(&event),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping malformed frame");
                metrics::record_dropped_frame();
                false
            }
        }
    }

    /// Render an event into the page's feed. Returns whether the feed changed.
    pub fn handle_event(&mut self, event: &FeedEvent) -> bool {
        metrics::record_event(event.kind());

        let Some(feed) = self.page.feed_mut() else {
            return false;
        };
        let Some(html) = render_event(event, &self.render) else {
            tracing::debug!("Ignoring unrecognized event");
            return false;
        };

        let entry = FeedEntry::new(html);
        let evicted = feed.prepend(entry.clone());
        metrics::record_feed_size(feed.len());
        tracing::trace!(kind = event.kind(), evicted, "Feed entry added");

        for sink in &mut self.sinks {
            sink.entry_added(&entry, &self.page);
        }
        true
    }
}
