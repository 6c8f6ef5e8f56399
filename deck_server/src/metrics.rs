//! Prometheus metrics for monitoring the deck server.
//!
//! Metrics are recorded through the `metrics` facade and exposed in
//! Prometheus text format when an exporter address is configured. Without
//! an exporter every call here is a no-op.
//!
//! # Metrics Categories
//!
//! - **HTTP Metrics**: Request counts, duration, status codes
//! - **Deck Metrics**: Decks created, cards drawn, decks stored

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Deck Metrics
// ============================================================================

/// Increment decks created counter.
pub fn decks_created_total(shuffled: bool) {
    metrics::counter!("decks_created_total",
        "shuffled" => shuffled.to_string()
    )
    .increment(1);
}

/// Add drawn cards to the cards drawn counter.
pub fn cards_drawn_total(count: usize) {
    metrics::counter!("cards_drawn_total").increment(count as u64);
}

/// Set current stored decks count.
pub fn decks_stored(count: usize) {
    metrics::gauge!("decks_stored").set(count as f64);
}
