use std::time::Duration;

use axum::{body::Body, extract::Request, response::Response};
use tracing::{Level, Span};
use uuid::Uuid;

/// One span per request, tagged with a fresh request id so all log lines of
/// a request can be correlated.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        Level::INFO,
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(Level::INFO, "[REQUEST START]");
}

pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();

    match status / 100 {
        4..=5 => {
            tracing::event!(Level::ERROR, latency = ?latency, status, "[REQUEST END]")
        }
        _ => tracing::event!(Level::INFO, latency = ?latency, status, "[REQUEST END]"),
    };
}
