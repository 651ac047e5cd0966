//! Metadata information regarding the database and the tables we read and write.

pub mod database;

// re-export without modules
pub use database::*;

/// Metadata information.
///
/// Everything lives in a single database, whose name comes from the connection settings.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Metadata {
    pub database: String,
}

impl Metadata {
    pub fn new(database: impl Into<String>) -> Self {
        Metadata {
            database: database.into(),
        }
    }

    /// The wide incrementality fact table.
    pub fn incrementality(&self) -> TableInfo {
        TableInfo {
            database: self.database.clone(),
            table_name: INCREMENTALITY_TABLE_NAME,
            columns: INCREMENTALITY_COLUMNS,
            sorting_key: INCREMENTALITY_SORTING_KEY,
        }
    }

    /// The brand dimension table used for brand lookups.
    pub fn brands(&self) -> TableInfo {
        TableInfo {
            database: self.database.clone(),
            table_name: BRANDS_TABLE_NAME,
            columns: BRANDS_COLUMNS,
            sorting_key: BRANDS_SORTING_KEY,
        }
    }
}
