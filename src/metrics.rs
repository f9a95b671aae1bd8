//! Prometheus metrics for the passthrough endpoint.
//!
//! This module provides metrics for:
//! - Passthrough request counts
//! - Downstream call latency
//! - Downstream call failures

use std::sync::OnceLock;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Passthrough requests counter metric name.
pub const METRIC_PASSTHROUGH_REQUESTS: &str = "passthrough_requests_total";
/// Downstream failures counter metric name.
pub const METRIC_DOWNSTREAM_FAILURES: &str = "downstream_failures_total";
/// Downstream request latency metric name.
pub const METRIC_DOWNSTREAM_LATENCY: &str = "downstream_request_latency_ms";

/// Global handle to the Prometheus recorder.
static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder and register metric descriptions.
/// Call this once at startup.
pub fn init_metrics() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("metrics already initialized");
    }

    describe_counter!(
        METRIC_PASSTHROUGH_REQUESTS,
        "Total number of passthrough requests received"
    );
    describe_counter!(
        METRIC_DOWNSTREAM_FAILURES,
        "Total number of failed calls to service-b"
    );
    describe_histogram!(
        METRIC_DOWNSTREAM_LATENCY,
        "Latency of calls to service-b in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Render the current metrics in Prometheus text format.
pub fn render_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_else(|| "# metrics recorder not initialized\n".to_string())
}

/// Count one inbound passthrough request.
pub fn increment_passthrough_requests() {
    counter!(METRIC_PASSTHROUGH_REQUESTS).increment(1);
}

/// Count one failed downstream call.
pub fn increment_downstream_failures() {
    counter!(METRIC_DOWNSTREAM_FAILURES).increment(1);
}

/// Record downstream call latency.
pub fn record_downstream_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_DOWNSTREAM_LATENCY).record(latency_ms);
}
