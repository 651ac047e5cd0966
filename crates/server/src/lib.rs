//! The incrementality read API.

pub mod error;
pub mod extract;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;

pub use routes::{cors_layer, create_router};
pub use state::{create_state, load_configuration, ServerState};
pub use store::{ClickHouseStore, Store, StoreError};
