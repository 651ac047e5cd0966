//! Metrics setup and update for statement execution.

use prometheus::core::{AtomicU64, GenericCounter};

#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: GenericCounter<AtomicU64>,
    pub query_error_total: GenericCounter<AtomicU64>,
    pub rows_returned_total: GenericCounter<AtomicU64>,
    pub rows_inserted_total: GenericCounter<AtomicU64>,
    pub connection_attempts_total: GenericCounter<AtomicU64>,
}

impl Metrics {
    /// Setup counters used to produce Prometheus metrics
    pub fn initialize(metrics_registry: &mut prometheus::Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "incrementality_query_total",
            "Total successful queries.",
        )?;

        let query_error_total = add_int_counter_metric(
            metrics_registry,
            "incrementality_query_error_total",
            "Total queries that failed.",
        )?;

        let rows_returned_total = add_int_counter_metric(
            metrics_registry,
            "incrementality_rows_returned_total",
            "Total rows read from the store.",
        )?;

        let rows_inserted_total = add_int_counter_metric(
            metrics_registry,
            "incrementality_rows_inserted_total",
            "Total rows written to the store.",
        )?;

        let connection_attempts_total = add_int_counter_metric(
            metrics_registry,
            "incrementality_connection_attempts_total",
            "Total connection attempts made to the store, failed ones included.",
        )?;

        Ok(Self {
            query_total,
            query_error_total,
            rows_returned_total,
            rows_inserted_total,
            connection_attempts_total,
        })
    }

    /// Counters that are not registered anywhere, for callers that do not export metrics.
    pub fn unregistered() -> Result<Self, prometheus::Error> {
        Self::initialize(&mut prometheus::Registry::new())
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}
