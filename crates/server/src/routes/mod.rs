mod get_brands;
mod get_health;
mod get_metrics;
mod get_prometheus_metrics;
mod get_weekly_metrics;
mod post_test_data;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::ServerState;

pub use get_brands::get_brands;
pub use get_health::get_health;
pub use get_metrics::get_metrics;
pub use get_prometheus_metrics::get_prometheus_metrics;
pub use get_weekly_metrics::get_weekly_metrics;
pub use post_test_data::post_test_data;

/// The API routes live under `/api/v1` and carry the CORS policy; the health probe is also
/// served at `/` and Prometheus metrics at `/metrics`. Unknown paths get a 404 envelope.
pub fn create_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/v1", get(get_health))
        .route("/api/v1/", get(get_health))
        .route("/api/v1/brands", get(get_brands))
        .route("/api/v1/metrics/:brand_id", get(get_metrics))
        .route("/api/v1/metrics/:brand_id/weekly", get(get_weekly_metrics))
        .route("/api/v1/test-data", post(post_test_data))
        .layer(cors)
        .route("/", get(get_health))
        .route("/metrics", get(get_prometheus_metrics))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> ServerError {
    ServerError::RouteNotFound
}

/// Any origin when the list is empty or contains `*`, otherwise exactly the listed origins.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(error) => {
                        tracing::warn!(origin, %error, "ignoring invalid CORS origin");
                        None
                    }
                }),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
