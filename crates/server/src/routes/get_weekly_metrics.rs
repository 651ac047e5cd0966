use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use query_engine_translation::translation::query::DateRange;

use super::get_metrics::parse_brand_id;
use crate::error::ServerError;
use crate::extract::{path_segment, QueryParams};
use crate::response::{EmptyData, Envelope, PrettyJson};
use crate::state::ServerState;

#[derive(Debug, Default)]
pub struct WeeklyParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl WeeklyParams {
    fn from_query(params: &QueryParams) -> Self {
        WeeklyParams {
            start_date: params.first("start_date").map(str::to_string),
            end_date: params.first("end_date").map(str::to_string),
        }
    }

    /// Missing and empty values both leave the bound open.
    fn date_range(&self) -> Result<DateRange, ServerError> {
        Ok(DateRange {
            start: parse_date("start_date", self.start_date.as_deref())?,
            end: parse_date("end_date", self.end_date.as_deref())?,
        })
    }
}

pub async fn get_weekly_metrics(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let brand_id = parse_brand_id(&path_segment(path, EmptyData::List)?, EmptyData::List)?;
    let params = QueryParams::from_extracted(query, EmptyData::List)?;
    let range = WeeklyParams::from_query(&params).date_range()?;

    let metrics = state
        .store
        .weekly_metrics(brand_id, &range)
        .await
        .map_err(|error| {
            tracing::error!(
                component = "get_weekly_metrics",
                brand_id,
                %error,
                "Error in get_weekly_metrics"
            );
            ServerError::WeeklyMetricsFailed
        })?;

    Ok(PrettyJson(StatusCode::OK, Envelope::success(metrics)))
}

fn parse_date(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ServerError> {
    match value {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ServerError::InvalidParameter {
                message: format!("Invalid {name}: {text}"),
                empty: EmptyData::List,
            }),
    }
}
