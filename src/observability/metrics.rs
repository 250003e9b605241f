//! Metrics collection and exposition.
//!
//! # Metrics
//! - `live_feed_connections_total` (counter): successful opens
//! - `live_feed_disconnects_total` (counter): closes, including failed handshakes
//! - `live_feed_events_total` (counter): decoded events by `type`
//! - `live_feed_dropped_frames_total` (counter): frames that failed to decode
//! - `live_feed_entries` (gauge): entries currently in the feed
//!
//! Recording is a no-op until a recorder is installed by [`init_metrics`].

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_connected() {
    metrics::counter!("live_feed_connections_total").increment(1);
}

pub fn record_disconnected() {
    metrics::counter!("live_feed_disconnects_total").increment(1);
}

pub fn record_event(kind: &'static str) {
    metrics::counter!("live_feed_events_total", "type" => kind).increment(1);
}

pub fn record_dropped_frame() {
    metrics::counter!("live_feed_dropped_frames_total").increment(1);
}

pub fn record_feed_size(len: usize) {
    metrics::gauge!("live_feed_entries").set(len as f64);
}
