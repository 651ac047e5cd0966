//! The JSON envelope every endpoint answers with.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::ser::SerializeSeq as _;
use serde::Serialize;

pub const SUCCESS: &str = "Success";

/// `{"data": ..., "message": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope {
            data,
            message: SUCCESS.to_string(),
        }
    }
}

/// `{"message": ...}`, for endpoints that return no data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageOnly {
    pub message: String,
}

/// The value an endpoint reports as `data` when it has nothing to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyData {
    Null,
    List,
}

impl Serialize for EmptyData {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EmptyData::Null => serializer.serialize_none(),
            EmptyData::List => serializer.serialize_seq(Some(0))?.end(),
        }
    }
}

/// A JSON body indented by two spaces, keys in declaration order and non-ASCII text kept as is.
pub struct PrettyJson<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let PrettyJson(status, value) = self;
        match serde_json::to_string_pretty(&value) {
            Ok(body) => (
                status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body + "\n",
            )
                .into_response(),
            Err(error) => {
                tracing::error!(%error, "unable to serialize response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
