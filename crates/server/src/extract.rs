//! Request parameters, read so that every rejection still answers with the envelope.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};

use crate::error::ServerError;
use crate::response::EmptyData;

/// The query string as ordered key/value pairs. A repeated key is not an error: the first
/// value wins and later ones are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        QueryParams(pairs)
    }

    pub fn from_extracted(
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
        empty: EmptyData,
    ) -> Result<Self, ServerError> {
        match query {
            Ok(Query(pairs)) => Ok(QueryParams(pairs)),
            Err(rejection) => Err(ServerError::InvalidParameter {
                message: rejection.body_text(),
                empty,
            }),
        }
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The single path segment of a route, or a 400 carrying `empty`.
pub fn path_segment(
    path: Result<Path<String>, PathRejection>,
    empty: EmptyData,
) -> Result<String, ServerError> {
    match path {
        Ok(Path(segment)) => Ok(segment),
        Err(rejection) => Err(ServerError::InvalidParameter {
            message: rejection.body_text(),
            empty,
        }),
    }
}
