//! Execute an execution plan against the store.

use query_engine_sql::sql;
use serde::de::DeserializeOwned;

use crate::connection::Connection;
use crate::error::Error;
use crate::metrics;

/// Run a read plan and decode its rows, updating the counters either way.
pub async fn execute<T: DeserializeOwned>(
    connection: &Connection,
    metrics: &metrics::Metrics,
    plan: &sql::execution_plan::ExecutionPlan,
) -> Result<Vec<T>, Error> {
    let query = plan.query_sql();

    tracing::info!(
        root_field = plan.root_field,
        generated_sql = query.sql,
        params = ?&query.params,
    );

    match connection.fetch_rows(&query).await {
        Ok(rows) => {
            metrics.query_total.inc();
            metrics.rows_returned_total.inc_by(rows.len() as u64);
            Ok(rows)
        }
        Err(error) => {
            metrics.query_error_total.inc();
            tracing::error!(root_field = plan.root_field, %error, "query failed");
            Err(error)
        }
    }
}

/// Run an INSERT with the given rows.
pub async fn insert<T: serde::Serialize>(
    connection: &Connection,
    metrics: &metrics::Metrics,
    insert: &sql::string::SQL,
    rows: &[T],
) -> Result<u64, Error> {
    tracing::info!(generated_sql = insert.sql, rows = rows.len());

    match connection.insert_rows(insert, rows).await {
        Ok(inserted) => {
            metrics.query_total.inc();
            metrics.rows_inserted_total.inc_by(inserted);
            Ok(inserted)
        }
        Err(error) => {
            metrics.query_error_total.inc();
            tracing::error!(generated_sql = insert.sql, %error, "insert failed");
            Err(error)
        }
    }
}
