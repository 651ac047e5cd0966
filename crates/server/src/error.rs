//! Errors returned by the HTTP handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::{EmptyData, Envelope, MessageOnly, PrettyJson};

pub const BRANDS_FAILED: &str = "Error occurred while fetching brands";
pub const BRAND_NOT_FOUND: &str = "Brand not found";
pub const METRICS_FAILED: &str = "Error occurred while fetching metrics";
pub const WEEKLY_METRICS_FAILED: &str = "Error occurred while fetching weekly metrics";
pub const TEST_DATA_FAILED: &str = "Error occurred while inserting test data";
pub const ROUTE_NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, PartialEq)]
pub enum ServerError {
    BrandsFailed,
    BrandNotFound,
    MetricsFailed,
    WeeklyMetricsFailed,
    /// Carries the store's own error text.
    TestDataFailed(String),
    InvalidParameter {
        message: String,
        empty: EmptyData,
    },
    RouteNotFound,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, empty, message) = match self {
            ServerError::BrandsFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                EmptyData::List,
                BRANDS_FAILED.to_string(),
            ),
            ServerError::BrandNotFound => (
                StatusCode::NOT_FOUND,
                EmptyData::Null,
                BRAND_NOT_FOUND.to_string(),
            ),
            ServerError::MetricsFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                EmptyData::Null,
                METRICS_FAILED.to_string(),
            ),
            ServerError::WeeklyMetricsFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                EmptyData::List,
                WEEKLY_METRICS_FAILED.to_string(),
            ),
            ServerError::TestDataFailed(detail) => {
                let message = format!("{TEST_DATA_FAILED}: {detail}");
                tracing::info!(%message, "returning error");
                return PrettyJson(StatusCode::INTERNAL_SERVER_ERROR, MessageOnly { message })
                    .into_response();
            }
            ServerError::InvalidParameter { message, empty } => {
                (StatusCode::BAD_REQUEST, empty, message)
            }
            ServerError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                EmptyData::Null,
                ROUTE_NOT_FOUND.to_string(),
            ),
        };

        tracing::info!(%message, status = status.as_u16(), "returning error");
        PrettyJson(status, Envelope { data: empty, message }).into_response()
    }
}
