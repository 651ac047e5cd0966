//! Idempotent schema creation and bulk insert of fixture rows.

use incrementality_configuration::Configuration;
use query_engine_execution::metrics::Metrics;
use query_engine_execution::{connect_with_retry, query, Connection};
use query_engine_metadata::metadata::Metadata;
use query_engine_translation::translation::{ddl, query as translate};
use thiserror::Error;
use tracing::{info_span, Instrument};

use crate::fixture_set::FixtureSet;
use crate::record::{BrandRecord, IncrementalityRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("the embedded fixture set is invalid: {0}")]
    InvalidFixtureSet(#[source] serde_json::Error),
    #[error("unable to connect: {0}")]
    Connect(#[source] query_engine_execution::Error),
    #[error("unable to list databases: {0}")]
    ListDatabases(#[source] query_engine_execution::Error),
    #[error("unable to create schema: {0}")]
    CreateSchema(#[source] query_engine_execution::Error),
    #[error("{0}")]
    Insert(#[source] query_engine_execution::Error),
    #[error("unable to read back inserted rows: {0}")]
    ReadBack(#[source] query_engine_execution::Error),
}

/// What a full fixture load did.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub databases: Vec<String>,
    pub inserted_records: u64,
    pub inserted_brands: u64,
    pub read_back: Vec<IncrementalityRecord>,
}

/// Create the database, the fact table and the brand table when they do not exist yet.
pub async fn ensure_schema(connection: &Connection, metadata: &Metadata) -> Result<(), LoadError> {
    let statements = [
        ddl::create_database(metadata),
        ddl::create_table(&metadata.incrementality()),
        ddl::create_table(&metadata.brands()),
    ];
    for statement in &statements {
        tracing::debug!(generated_sql = statement.0.sql);
        connection
            .execute_ddl(statement)
            .await
            .map_err(LoadError::CreateSchema)?;
    }
    Ok(())
}

/// Insert fact rows in a single request.
pub async fn insert_records(
    connection: &Connection,
    metrics: &Metrics,
    metadata: &Metadata,
    records: &[IncrementalityRecord],
) -> Result<u64, LoadError> {
    let insert = ddl::insert(&metadata.incrementality());
    query::insert(connection, metrics, &insert, records)
        .await
        .map_err(LoadError::Insert)
}

/// Insert brand dimension rows in a single request.
pub async fn insert_brands(
    connection: &Connection,
    metrics: &Metrics,
    metadata: &Metadata,
    brands: &[BrandRecord],
) -> Result<u64, LoadError> {
    let insert = ddl::insert(&metadata.brands());
    query::insert(connection, metrics, &insert, brands)
        .await
        .map_err(LoadError::Insert)
}

/// Load the whole embedded fixture set: connect, create the schema, insert every row and read
/// back the rows of the first fixture brand.
pub async fn load(configuration: &Configuration, metrics: &Metrics) -> Result<LoadReport, LoadError> {
    let fixtures = FixtureSet::v1().map_err(LoadError::InvalidFixtureSet)?;
    let metadata = &configuration.metadata;

    let connection = connect_with_retry(&configuration.connection, &configuration.retry, metrics)
        .await
        .map_err(LoadError::Connect)?;

    let databases = connection
        .show_databases(&ddl::show_databases())
        .await
        .map_err(LoadError::ListDatabases)?;
    for database in &databases {
        tracing::info!(database, "available database");
    }

    ensure_schema(&connection, metadata)
        .instrument(info_span!("Create schema"))
        .await?;

    let inserted_records = insert_records(&connection, metrics, metadata, &fixtures.incrementality)
        .instrument(info_span!("Insert incrementality rows"))
        .await?;
    tracing::info!(
        fixture_set = fixtures.name,
        rows = inserted_records,
        table = metadata.incrementality().table_name,
        "inserted fixture rows"
    );

    let inserted_brands = insert_brands(&connection, metrics, metadata, &fixtures.brands)
        .instrument(info_span!("Insert brand rows"))
        .await?;
    tracing::info!(
        fixture_set = fixtures.name,
        rows = inserted_brands,
        table = metadata.brands().table_name,
        "inserted fixture rows"
    );

    let read_back = match fixtures.seed_record() {
        Some(seed) => {
            let plan = translate::brand_records(metadata, seed.brand_original_id);
            query::execute::<IncrementalityRecord>(&connection, metrics, &plan)
                .await
                .map_err(LoadError::ReadBack)?
        }
        None => vec![],
    };
    for record in &read_back {
        tracing::info!(?record, "read back");
    }

    Ok(LoadReport {
        databases,
        inserted_records,
        inserted_brands,
        read_back,
    })
}
