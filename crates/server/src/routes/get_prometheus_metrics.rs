use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use prometheus::{Encoder, TextEncoder};

use crate::state::ServerState;

/// Every registered metric in the Prometheus text format.
pub async fn get_prometheus_metrics(State(state): State<ServerState>) -> Response {
    let encoder = TextEncoder::new();
    let mut buffer = vec![];
    if let Err(error) = encoder.encode(&state.metrics_registry.gather(), &mut buffer) {
        tracing::error!(%error, "unable to encode metrics");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], buffer).into_response()
        }
        Err(_) => (StatusCode::OK, buffer).into_response(),
    }
}
