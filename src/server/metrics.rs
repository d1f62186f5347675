use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all song library metrics
const PREFIX: &str = "song_library";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Song Metrics
    pub static ref SONG_OPERATIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_song_operations_total"), "Song service operations by outcome"),
        &["operation", "outcome"]
    ).expect("Failed to create song_operations_total metric");

    pub static ref SONGS_STORED: Gauge = Gauge::new(
        format!("{PREFIX}_songs_stored"),
        "Number of songs in the library"
    ).expect("Failed to create songs_stored metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Already registered is fine, tests call this repeatedly
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(SONG_OPERATIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(SONGS_STORED.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Collapse song ids in request paths so that label cardinality stays bounded.
pub fn normalize_path(path: &str) -> &'static str {
    let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    match segments.as_slice() {
        [""] => "/",
        ["", "songs"] => "/songs",
        ["", "songs", _] => "/songs/{id}",
        ["", "songs", _, "paginate"] => "/songs/{id}/paginate",
        _ => "other",
    }
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let path = normalize_path(path);
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record the outcome ("ok" or an error kind) of a song service operation
pub fn record_song_operation(operation: &str, outcome: &str) {
    SONG_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

pub fn set_songs_stored(count: usize) {
    SONGS_STORED.set(count as f64);
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_default();
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
