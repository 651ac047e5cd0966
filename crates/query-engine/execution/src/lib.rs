//! Statement execution against ClickHouse over its HTTP interface.

pub mod connection;
pub mod deserialize;
pub mod error;
pub mod metrics;
pub mod query;

pub use connection::{connect_with_retry, Connection};
pub use error::Error;
