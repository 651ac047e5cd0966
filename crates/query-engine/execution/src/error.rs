//! Errors for query execution.

use thiserror::Error;

/// Query planning and execution errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to create the HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to the store failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("the store rejected the statement ({status}): {message}")]
    Store { status: u16, message: String },
    #[error("unexpected ping response: {0:?}")]
    UnexpectedPing(String),
    #[error("unable to decode row {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to encode row: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("store unavailable after {attempts} attempts: {last}")]
    Unavailable { attempts: u32, last: Box<Error> },
}
