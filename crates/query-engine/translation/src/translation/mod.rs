//! Translate API requests and loader operations into SQL to be run against the store.

pub mod ddl;
pub mod query;
