//! Check the SQL generated for each endpoint and for the loader.

use chrono::NaiveDate;
use similar_asserts::assert_eq;

use query_engine_metadata::metadata::Metadata;
use query_engine_sql::sql::string::Param;
use query_engine_translation::translation::{ddl, query};

fn metadata() -> Metadata {
    Metadata::new("incrementality")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn brands_without_search() {
    let sql = query::brands(&metadata(), None).query_sql();
    insta::assert_snapshot!(sql.sql, @r#"SELECT "brand_id" AS "brand_id", "brand_name" AS "brand_name", "totalIroas" AS "totalIroas", "spIroas" AS "spIroas", "sdIroas" AS "sdIroas", "sbIroas" AS "sbIroas", "dspIroas" AS "dspIroas" FROM "incrementality"."brands" ORDER BY "brand_id" ASC"#);
    assert!(sql.params.is_empty());
}

#[test]
fn brands_with_text_search() {
    let search = query::BrandSearch::parse("Acme").unwrap();
    let sql = query::brands(&metadata(), Some(&search)).query_sql();
    assert!(sql
        .sql
        .ends_with(r#"FROM "incrementality"."brands" WHERE ("brand_name" ILIKE {p1:String}) ORDER BY "brand_id" ASC"#));
    assert_eq!(sql.params, vec![Param::String("%Acme%".to_string())]);
}

#[test]
fn brands_with_numeric_search() {
    let search = query::BrandSearch::parse("1834604203458756610").unwrap();
    let sql = query::brands(&metadata(), Some(&search)).query_sql();
    assert!(sql.sql.ends_with(
        r#"WHERE (("brand_id" = {p1:UInt64}) OR ("brand_name" ILIKE {p2:String})) ORDER BY "brand_id" ASC"#
    ));
    assert_eq!(
        sql.params,
        vec![
            Param::UInt64(1_834_604_203_458_756_610),
            Param::String("%1834604203458756610%".to_string())
        ]
    );
}

#[test]
fn latest_metrics_is_pinned_to_one_row() {
    let sql = query::latest_metrics(&metadata(), 42).query_sql();
    insta::assert_snapshot!(sql.sql, @r#"SELECT "totalIroas" AS "totalIroas", "spIroas" AS "spIroas", "sdIroas" AS "sdIroas", "sbIroas" AS "sbIroas", "dspIroas" AS "dspIroas" FROM "incrementality"."incrementalityResult_all" WHERE (("brandOriginalId" = {p1:UInt64}) AND ("sign" = 1)) ORDER BY "reportDate" DESC, "version" DESC LIMIT 1"#);
    assert_eq!(sql.params, vec![Param::UInt64(42)]);
}

#[test]
fn weekly_metrics_with_both_bounds() {
    let range = query::DateRange {
        start: Some(date(2022, 1, 1)),
        end: Some(date(2022, 12, 31)),
    };
    let sql = query::weekly_metrics(&metadata(), 42, &range).query_sql();
    insta::assert_snapshot!(sql.sql, @r#"SELECT "reportDate" AS "reportDate", "totalIroas" AS "totalIroas", "spIroas" AS "spIroas", "sdIroas" AS "sdIroas", "sbIroas" AS "sbIroas", "dspIroas" AS "dspIroas" FROM "incrementality"."incrementalityResult_all" WHERE (("brandOriginalId" = {p1:UInt64}) AND ("reportDate" BETWEEN {p2:Date} AND {p3:Date})) ORDER BY "reportDate" ASC"#);
    assert_eq!(
        sql.named_params().collect::<Vec<_>>(),
        vec![
            ("p1".to_string(), "42".to_string()),
            ("p2".to_string(), "2022-01-01".to_string()),
            ("p3".to_string(), "2022-12-31".to_string()),
        ]
    );
}

#[test]
fn weekly_metrics_with_start_only() {
    let range = query::DateRange {
        start: Some(date(2022, 2, 1)),
        end: None,
    };
    let sql = query::weekly_metrics(&metadata(), 42, &range).query_sql();
    assert!(sql.sql.ends_with(
        r#"WHERE (("brandOriginalId" = {p1:UInt64}) AND ("reportDate" >= {p2:Date})) ORDER BY "reportDate" ASC"#
    ));
}

#[test]
fn weekly_metrics_with_end_only() {
    let range = query::DateRange {
        start: None,
        end: Some(date(2022, 2, 1)),
    };
    let sql = query::weekly_metrics(&metadata(), 42, &range).query_sql();
    assert!(sql.sql.ends_with(
        r#"WHERE (("brandOriginalId" = {p1:UInt64}) AND ("reportDate" <= {p2:Date})) ORDER BY "reportDate" ASC"#
    ));
}

#[test]
fn weekly_metrics_without_bounds() {
    let sql = query::weekly_metrics(&metadata(), 42, &query::DateRange::default()).query_sql();
    assert!(sql.sql.ends_with(
        r#"WHERE ("brandOriginalId" = {p1:UInt64}) ORDER BY "reportDate" ASC"#
    ));
    assert_eq!(sql.params.len(), 1);
}

#[test]
fn create_statements() {
    let metadata = metadata();
    assert_eq!(
        ddl::create_database(&metadata).0.sql,
        r#"CREATE DATABASE IF NOT EXISTS "incrementality""#
    );

    let brands = ddl::create_table(&metadata.brands()).0.sql;
    insta::assert_snapshot!(brands, @r#"CREATE TABLE IF NOT EXISTS "incrementality"."brands" ("brand_id" UInt64, "brand_name" String, "totalIroas" Nullable(Float64), "spIroas" Nullable(Float64), "sdIroas" Nullable(Float64), "sbIroas" Nullable(Float64), "dspIroas" Nullable(Float64)) ENGINE = MergeTree() ORDER BY ("brand_id")"#);

    let facts = ddl::create_table(&metadata.incrementality()).0.sql;
    assert!(facts.starts_with(
        r#"CREATE TABLE IF NOT EXISTS "incrementality"."incrementalityResult_all" ("brandOriginalId" UInt64, "reportDate" Date, "date" Date, "#
    ));
    assert!(facts.contains(r#""sdIroas" Nullable(Float64), "sbIroas" Float64, "#));
    assert!(facts.ends_with(
        r#""sign" Int8, "_insert_time" DateTime) ENGINE = MergeTree() ORDER BY ("brandOriginalId", "reportDate")"#
    ));
}

#[test]
fn insert_lists_columns_in_schema_order() {
    let sql = ddl::insert(&metadata().incrementality()).sql;
    assert!(sql.starts_with(
        r#"INSERT INTO "incrementality"."incrementalityResult_all" ("brandOriginalId", "reportDate", "#
    ));
    assert!(sql.ends_with(r#""version", "sign", "_insert_time") FORMAT JSONEachRow"#));
}
