use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use query_engine_translation::translation::query::BrandSearch;

use crate::error::ServerError;
use crate::extract::QueryParams;
use crate::response::{EmptyData, Envelope, PrettyJson};
use crate::state::ServerState;

pub async fn get_brands(
    State(state): State<ServerState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let params = QueryParams::from_extracted(query, EmptyData::List)?;
    let search = BrandSearch::parse(params.first("search").unwrap_or_default());

    let brands = state
        .store
        .brands(search.as_ref())
        .await
        .map_err(|error| {
            tracing::error!(component = "get_brands", %error, "Error in get_brands");
            ServerError::BrandsFailed
        })?;

    Ok(PrettyJson(StatusCode::OK, Envelope::success(brands)))
}
