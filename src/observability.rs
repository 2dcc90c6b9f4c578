use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: bookings created.
pub const BOOKINGS_CREATED_TOTAL: &str = "lendit_bookings_created_total";

/// Counter: approve/reject transitions applied. Labels: status.
pub const BOOKING_DECISIONS_TOTAL: &str = "lendit_booking_decisions_total";

/// Counter: decisions denied to non-owners.
pub const DECISIONS_DENIED_TOTAL: &str = "lendit_decisions_denied_total";

/// Counter: listing queries served. Labels: state.
pub const BOOKING_QUERIES_TOTAL: &str = "lendit_booking_queries_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
