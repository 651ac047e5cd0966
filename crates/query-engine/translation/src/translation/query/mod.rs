//! Build the read queries behind the HTTP endpoints.

mod filtering;

use query_engine_metadata::metadata;
use query_engine_sql::sql::ast::{Expression, OrderByDirection, Param, Value, Where};
use query_engine_sql::sql::execution_plan::ExecutionPlan;
use query_engine_sql::sql::helpers;

pub use filtering::{BrandSearch, DateRange};

/// The per-channel iROAS columns, in response order.
pub const IROAS_COLUMNS: [&str; 5] = ["totalIroas", "spIroas", "sdIroas", "sbIroas", "dspIroas"];

/// Columns of a brand listing entry.
pub const BRAND_COLUMNS: [&str; 7] = [
    "brand_id",
    "brand_name",
    "totalIroas",
    "spIroas",
    "sdIroas",
    "sbIroas",
    "dspIroas",
];

/// Columns of a weekly series entry.
pub const WEEKLY_COLUMNS: [&str; 6] = [
    "reportDate",
    "totalIroas",
    "spIroas",
    "sdIroas",
    "sbIroas",
    "dspIroas",
];

/// List brands, optionally narrowed by a search.
pub fn brands(metadata: &metadata::Metadata, search: Option<&BrandSearch>) -> ExecutionPlan {
    let table = metadata.brands();
    let mut select = helpers::select_columns(
        helpers::table_reference(&table.database, table.table_name),
        &BRAND_COLUMNS,
    );
    if let Some(search) = search {
        select.where_ = Where(search.predicate());
    }
    select.order_by = helpers::order_by(vec![("brand_id", OrderByDirection::Asc)]);

    ExecutionPlan {
        root_field: "brands".to_string(),
        query: select,
    }
}

/// The iROAS figures of a brand's most recent report.
///
/// Only rows with `sign = 1` are considered; the latest `reportDate` wins and ties between
/// replacement rows of the same report go to the highest `version`.
pub fn latest_metrics(metadata: &metadata::Metadata, brand_id: u64) -> ExecutionPlan {
    let table = metadata.incrementality();
    let mut select = helpers::select_columns(
        helpers::table_reference(&table.database, table.table_name),
        &IROAS_COLUMNS,
    );
    select.where_ = Where(helpers::and(
        brand_predicate(brand_id),
        helpers::equals(helpers::column("sign"), Expression::Value(Value::Int(1))),
    ));
    select.order_by = helpers::order_by(vec![
        ("reportDate", OrderByDirection::Desc),
        ("version", OrderByDirection::Desc),
    ]);
    select.limit.limit = Some(1);

    ExecutionPlan {
        root_field: "metrics".to_string(),
        query: select,
    }
}

/// A brand's iROAS series, ascending by report date, within an optional inclusive range.
pub fn weekly_metrics(
    metadata: &metadata::Metadata,
    brand_id: u64,
    range: &DateRange,
) -> ExecutionPlan {
    let table = metadata.incrementality();
    let mut select = helpers::select_columns(
        helpers::table_reference(&table.database, table.table_name),
        &WEEKLY_COLUMNS,
    );
    select.where_ = Where(helpers::conjunction(
        std::iter::once(brand_predicate(brand_id)).chain(range.predicate("reportDate")),
    ));
    select.order_by = helpers::order_by(vec![("reportDate", OrderByDirection::Asc)]);

    ExecutionPlan {
        root_field: "weekly_metrics".to_string(),
        query: select,
    }
}

/// Every column of the fact table for one brand, in schema order.
pub fn brand_records(metadata: &metadata::Metadata, brand_id: u64) -> ExecutionPlan {
    let table = metadata.incrementality();
    let columns: Vec<&str> = table.column_names().collect();
    let mut select = helpers::select_columns(
        helpers::table_reference(&table.database, table.table_name),
        &columns,
    );
    select.where_ = Where(brand_predicate(brand_id));
    select.order_by = helpers::order_by(vec![
        ("reportDate", OrderByDirection::Asc),
        ("version", OrderByDirection::Asc),
    ]);

    ExecutionPlan {
        root_field: "brand_records".to_string(),
        query: select,
    }
}

fn brand_predicate(brand_id: u64) -> Expression {
    helpers::equals(
        helpers::column("brandOriginalId"),
        Expression::Parameter(Param::UInt64(brand_id)),
    )
}
