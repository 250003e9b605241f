//! Capped exponential backoff for reconnects.
//!
//! # State Transitions
//! ```text
//! on_open:  delay = initial, retries = 0
//! on_close: retries += 1
//!           retries >= ceiling → GiveUp
//!           otherwise          → ReconnectAfter(delay), delay = min(delay * 2, max)
//! ```

use std::time::Duration;

use crate::config::ReconnectConfig;

/// What the client should do after a connection closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconnect {
    /// Schedule a new attempt after the given delay.
    After(Duration),
    /// The retry ceiling was reached; no further attempts.
    GiveUp,
}

/// Backoff delay and consecutive-failure counter for one client.
#[derive(Debug, Clone)]
pub struct ReconnectState {
    initial_ms: u64,
    max_ms: u64,
    max_retries: Option<u32>,
    current_ms: u64,
    retries: u32,
}

impl ReconnectState {
    pub fn new(initial_ms: u64, max_ms: u64, max_retries: Option<u32>) -> Self {
        Self {
            initial_ms,
            max_ms,
            max_retries,
            current_ms: initial_ms,
            retries: 0,
        }
    }

    pub fn from_config(config: &ReconnectConfig) -> Self {
        Self::new(
            config.initial_delay_ms,
            config.max_delay_ms,
            config.max_retries,
        )
    }

    /// Whether another connection attempt is permitted.
    pub fn may_connect(&self) -> bool {
        match self.max_retries {
            Some(ceiling) => self.retries < ceiling,
            None => true,
        }
    }

    /// A connection opened successfully.
    pub fn on_open(&mut self) {
        self.current_ms = self.initial_ms;
        self.retries = 0;
    }

    /// A connection closed, whether it ever opened or not.
    pub fn on_close(&mut self) -> Reconnect {
        self.retries = self.retries.saturating_add(1);
        if !self.may_connect() {
            return Reconnect::GiveUp;
        }

        let delay = Duration::from_millis(self.current_ms);
        self.current_ms = self.current_ms.saturating_mul(2).min(self.max_ms);
        Reconnect::After(delay)
    }

    /// Delay the next close will schedule.
    pub fn current_delay(&self) -> Duration {
        Duration::from_millis(self.current_ms)
    }

    /// Consecutive closes since the last successful open.
    pub fn retries(&self) -> u32 {
        self.retries
    }
}

impl Default for ReconnectState {
    fn default() -> Self {
        Self::from_config(&ReconnectConfig::default())
    }
}
