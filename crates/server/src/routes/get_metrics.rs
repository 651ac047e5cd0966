use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::ServerError;
use crate::extract::path_segment;
use crate::response::{EmptyData, Envelope, PrettyJson};
use crate::state::ServerState;

pub async fn get_metrics(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let brand_id = parse_brand_id(&path_segment(path, EmptyData::Null)?, EmptyData::Null)?;

    let metrics = state
        .store
        .latest_metrics(brand_id)
        .await
        .map_err(|error| {
            tracing::error!(component = "get_metrics", brand_id, %error, "Error in get_metrics");
            ServerError::MetricsFailed
        })?
        .ok_or(ServerError::BrandNotFound)?;

    Ok(PrettyJson(StatusCode::OK, Envelope::success(metrics)))
}

/// Brand ids are unsigned 64-bit integers.
pub(super) fn parse_brand_id(text: &str, empty: EmptyData) -> Result<u64, ServerError> {
    text.parse().map_err(|_| ServerError::InvalidParameter {
        message: format!("Invalid brand_id: {text}"),
        empty,
    })
}
