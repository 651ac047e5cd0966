//! Schema and fixture loading for the incrementality store.

pub mod fixture_set;
pub mod loader;
pub mod record;

pub use fixture_set::FixtureSet;
pub use loader::{ensure_schema, insert_brands, insert_records, load, LoadError, LoadReport};
pub use record::{BrandRecord, IncrementalityRecord};
