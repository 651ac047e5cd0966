//! The embedded sample data set.

use serde::Deserialize;

use crate::record::{BrandRecord, IncrementalityRecord};

pub const FIXTURE_SET_NAME: &str = "incrementality-fixtures-v1";

const FIXTURES_V1: &str = include_str!("../data/incrementality_v1.json");

/// A named, versioned collection of sample rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FixtureSet {
    pub name: String,
    pub version: u32,
    pub incrementality: Vec<IncrementalityRecord>,
    pub brands: Vec<BrandRecord>,
}

impl FixtureSet {
    /// The data set compiled into the binary.
    pub fn v1() -> Result<FixtureSet, serde_json::Error> {
        serde_json::from_str(FIXTURES_V1)
    }

    /// The record inserted by the test-data endpoint.
    pub fn seed_record(&self) -> Option<&IncrementalityRecord> {
        self.incrementality.first()
    }
}
