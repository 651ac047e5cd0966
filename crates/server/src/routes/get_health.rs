use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::response::{Envelope, PrettyJson};
use crate::types::output::Health;

pub async fn get_health() -> impl IntoResponse {
    PrettyJson(StatusCode::OK, Envelope::success(Health::current()))
}
