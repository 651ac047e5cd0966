//! Statements that create and fill the tables.

use query_engine_metadata::metadata::{self, TableInfo};
use query_engine_sql::sql::ast::{
    ColumnDefinition, ColumnName, CreateDatabase, CreateTable, DatabaseName, Engine, Format,
    Insert, ShowDatabases,
};
use query_engine_sql::sql::helpers;
use query_engine_sql::sql::string::{DDL, SQL};

/// `CREATE DATABASE IF NOT EXISTS` for the configured database.
pub fn create_database(metadata: &metadata::Metadata) -> DDL {
    let mut sql = SQL::new();
    CreateDatabase {
        name: DatabaseName(metadata.database.clone()),
        if_not_exists: true,
    }
    .to_sql(&mut sql);
    DDL(sql)
}

/// `CREATE TABLE IF NOT EXISTS` with every column of the table, sorted by its sorting key.
pub fn create_table(table: &TableInfo) -> DDL {
    let mut sql = SQL::new();
    CreateTable {
        table: helpers::table_reference(&table.database, table.table_name),
        if_not_exists: true,
        columns: table
            .columns
            .iter()
            .map(|column| ColumnDefinition {
                name: ColumnName(column.name.to_string()),
                data_type: column.r#type.to_string(),
            })
            .collect(),
        engine: Engine::MergeTree,
        order_by: table
            .sorting_key
            .iter()
            .map(|name| ColumnName((*name).to_string()))
            .collect(),
    }
    .to_sql(&mut sql);
    DDL(sql)
}

/// An INSERT naming every column of the table; rows follow as JSON objects, one per line.
pub fn insert(table: &TableInfo) -> SQL {
    let mut sql = SQL::new();
    Insert {
        table: helpers::table_reference(&table.database, table.table_name),
        columns: table
            .column_names()
            .map(|name| ColumnName(name.to_string()))
            .collect(),
        format: Format::JSONEachRow,
    }
    .to_sql(&mut sql);
    sql
}

pub fn show_databases() -> SQL {
    let mut sql = SQL::new();
    ShowDatabases.to_sql(&mut sql);
    sql
}
