//! The seam between the HTTP handlers and the store.

use async_trait::async_trait;
use incrementality_configuration::Configuration;
use incrementality_fixtures::{ensure_schema, insert_records, FixtureSet, LoadError};
use query_engine_execution::metrics::Metrics;
use query_engine_execution::{query, Connection};
use query_engine_translation::translation::query::{self as translate, BrandSearch, DateRange};
use thiserror::Error;

use crate::types::output::{BrandSummary, IroasMetrics, WeeklyIroas};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Execution(#[from] query_engine_execution::Error),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("the fixture set has no records")]
    NoSeedRecord,
}

/// Everything the handlers need from the store. Each call is independent.
#[async_trait]
pub trait Store: Send + Sync {
    async fn brands(&self, search: Option<&BrandSearch>) -> Result<Vec<BrandSummary>, StoreError>;

    /// The brand's latest report, if it has any.
    async fn latest_metrics(&self, brand_id: u64) -> Result<Option<IroasMetrics>, StoreError>;

    /// The brand's reports within the range, ascending by report date.
    async fn weekly_metrics(
        &self,
        brand_id: u64,
        range: &DateRange,
    ) -> Result<Vec<WeeklyIroas>, StoreError>;

    /// Insert the seed record of the embedded fixture set.
    async fn insert_test_data(&self) -> Result<u64, StoreError>;
}

/// The store backed by ClickHouse. A fresh connection is opened for every call.
pub struct ClickHouseStore {
    configuration: Configuration,
    metrics: Metrics,
}

impl ClickHouseStore {
    pub fn new(configuration: Configuration, metrics: Metrics) -> Self {
        ClickHouseStore {
            configuration,
            metrics,
        }
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        self.metrics.connection_attempts_total.inc();
        Ok(Connection::open(&self.configuration.connection)?)
    }
}

#[async_trait]
impl Store for ClickHouseStore {
    async fn brands(&self, search: Option<&BrandSearch>) -> Result<Vec<BrandSummary>, StoreError> {
        let plan = translate::brands(&self.configuration.metadata, search);
        let connection = self.connect()?;
        Ok(query::execute(&connection, &self.metrics, &plan).await?)
    }

    async fn latest_metrics(&self, brand_id: u64) -> Result<Option<IroasMetrics>, StoreError> {
        let plan = translate::latest_metrics(&self.configuration.metadata, brand_id);
        let connection = self.connect()?;
        let rows: Vec<IroasMetrics> = query::execute(&connection, &self.metrics, &plan).await?;
        Ok(rows.into_iter().next())
    }

    async fn weekly_metrics(
        &self,
        brand_id: u64,
        range: &DateRange,
    ) -> Result<Vec<WeeklyIroas>, StoreError> {
        let plan = translate::weekly_metrics(&self.configuration.metadata, brand_id, range);
        let connection = self.connect()?;
        Ok(query::execute(&connection, &self.metrics, &plan).await?)
    }

    async fn insert_test_data(&self) -> Result<u64, StoreError> {
        let fixtures = FixtureSet::v1().map_err(LoadError::InvalidFixtureSet)?;
        let seed = fixtures.seed_record().ok_or(StoreError::NoSeedRecord)?;
        let metadata = &self.configuration.metadata;

        let connection = self.connect()?;
        ensure_schema(&connection, metadata).await?;
        Ok(insert_records(
            &connection,
            &self.metrics,
            metadata,
            std::slice::from_ref(seed),
        )
        .await?)
    }
}
