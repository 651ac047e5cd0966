use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::ServerError;
use crate::response::{MessageOnly, PrettyJson};
use crate::state::ServerState;

pub const TEST_DATA_INSERTED: &str = "Test data inserted successfully";

pub async fn post_test_data(
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    let inserted = state.store.insert_test_data().await.map_err(|error| {
        tracing::error!(component = "post_test_data", %error, "Error inserting test data");
        ServerError::TestDataFailed(error.to_string())
    })?;
    tracing::info!(rows = inserted, "inserted test data");

    Ok(PrettyJson(
        StatusCode::OK,
        MessageOnly {
            message: TEST_DATA_INSERTED.to_string(),
        },
    ))
}
