//! Transient state used by the server.
//!
//! This is initialized on startup.

use std::path::Path;
use std::sync::Arc;

use incrementality_configuration::environment::Environment;
use incrementality_configuration::error::{
    MakeRuntimeConfigurationError, ParseConfigurationError,
};
use incrementality_configuration::{
    make_runtime_configuration, parse_configuration, Configuration, ParsedConfiguration,
    CONFIGURATION_FILENAME,
};
use query_engine_execution::{connect_with_retry, metrics};
use thiserror::Error;
use tracing::{info_span, Instrument};

use crate::store::{ClickHouseStore, Store};

/// State for our server.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn Store>,
    pub metrics_registry: prometheus::Registry,
}

impl ServerState {
    pub fn new(store: Arc<dyn Store>, metrics_registry: prometheus::Registry) -> Self {
        ServerState {
            store,
            metrics_registry,
        }
    }
}

/// Set up metrics, check that the store is reachable and wrap a store inside the server state.
pub async fn create_state(
    configuration: Configuration,
    mut metrics_registry: prometheus::Registry,
) -> Result<ServerState, InitializationError> {
    let metrics = async {
        metrics::Metrics::initialize(&mut metrics_registry)
            .map_err(InitializationError::MetricsError)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    connect_with_retry(&configuration.connection, &configuration.retry, &metrics)
        .instrument(info_span!("Check store"))
        .await
        .map_err(InitializationError::StoreUnavailable)?;

    let store = ClickHouseStore::new(configuration, metrics);
    Ok(ServerState::new(Arc::new(store), metrics_registry))
}

/// Read the configuration directory and resolve it against the environment. A directory
/// without a configuration file gets the initial configuration.
pub async fn load_configuration(
    configuration_dir: impl AsRef<Path>,
    environment: impl Environment,
) -> Result<Configuration, ConfigurationError> {
    let configuration_dir = configuration_dir.as_ref();
    let parsed = if configuration_dir.join(CONFIGURATION_FILENAME).exists() {
        parse_configuration(configuration_dir).await?
    } else {
        tracing::info!(
            directory = %configuration_dir.display(),
            "no configuration file found, using the initial configuration"
        );
        ParsedConfiguration::initial()
    };
    Ok(make_runtime_configuration(parsed, environment)?)
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Parse(#[from] ParseConfigurationError),
    #[error(transparent)]
    Make(#[from] MakeRuntimeConfigurationError),
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
    #[error("{0}")]
    StoreUnavailable(query_engine_execution::Error),
}
