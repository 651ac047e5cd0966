//! Common functions used across test cases.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test_helper::TestClient;

use incrementality_fixtures::{BrandRecord, FixtureSet, IncrementalityRecord};
use incrementality_server::types::output::{BrandSummary, IroasMetrics, WeeklyIroas};
use incrementality_server::{cors_layer, create_router, ServerState, Store, StoreError};
use query_engine_execution::metrics::Metrics;
use query_engine_translation::translation::query::{BrandSearch, DateRange};

pub const FIRST_BRAND: u64 = 1_834_604_203_458_756_610;
pub const SECOND_BRAND: u64 = 1_834_604_203_458_756_611;

/// A store holding rows in memory, answering with the same semantics as the real queries.
pub struct InMemoryStore {
    records: Mutex<Vec<IncrementalityRecord>>,
    brands: Vec<BrandRecord>,
    failing: bool,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        InMemoryStore {
            records: Mutex::new(vec![]),
            brands: vec![],
            failing: false,
        }
    }

    pub fn with_fixtures() -> Self {
        let fixtures = FixtureSet::v1().unwrap();
        InMemoryStore {
            records: Mutex::new(fixtures.incrementality),
            brands: fixtures.brands,
            failing: false,
        }
    }

    /// A store whose every call fails the way an unreachable server does.
    pub fn failing() -> Self {
        InMemoryStore {
            failing: true,
            ..Self::empty()
        }
    }

    pub fn with_brand(mut self, brand: BrandRecord) -> Self {
        self.brands.push(brand);
        self
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            Err(StoreError::Execution(query_engine_execution::Error::Store {
                status: 500,
                message: "Code: 210. DB::NetException: Connection refused".to_string(),
            }))
        } else {
            Ok(())
        }
    }
}

fn iroas(record: &IncrementalityRecord) -> IroasMetrics {
    IroasMetrics {
        total_iroas: Some(record.total_iroas),
        sp_iroas: Some(record.sp_iroas),
        sd_iroas: record.sd_iroas,
        sb_iroas: Some(record.sb_iroas),
        dsp_iroas: record.dsp_iroas,
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn brands(&self, search: Option<&BrandSearch>) -> Result<Vec<BrandSummary>, StoreError> {
        self.check()?;
        let mut brands: Vec<BrandSummary> = self
            .brands
            .iter()
            .filter(|brand| match search {
                None => true,
                Some(search) => {
                    search.brand_id() == Some(brand.brand_id)
                        || brand
                            .brand_name
                            .to_lowercase()
                            .contains(&search.text().to_lowercase())
                }
            })
            .map(|brand| BrandSummary {
                brand_id: brand.brand_id,
                brand_name: brand.brand_name.clone(),
                total_iroas: brand.total_iroas,
                sp_iroas: brand.sp_iroas,
                sd_iroas: brand.sd_iroas,
                sb_iroas: brand.sb_iroas,
                dsp_iroas: brand.dsp_iroas,
            })
            .collect();
        brands.sort_by_key(|brand| brand.brand_id);
        Ok(brands)
    }

    async fn latest_metrics(&self, brand_id: u64) -> Result<Option<IroasMetrics>, StoreError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|record| record.brand_original_id == brand_id && record.sign == 1)
            .max_by_key(|record| (record.report_date, record.version))
            .map(iroas))
    }

    async fn weekly_metrics(
        &self,
        brand_id: u64,
        range: &DateRange,
    ) -> Result<Vec<WeeklyIroas>, StoreError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        let mut weekly: Vec<WeeklyIroas> = records
            .iter()
            .filter(|record| record.brand_original_id == brand_id)
            .filter(|record| range.start.map_or(true, |start| record.report_date >= start))
            .filter(|record| range.end.map_or(true, |end| record.report_date <= end))
            .map(|record| {
                let metrics = iroas(record);
                WeeklyIroas {
                    report_date: record.report_date,
                    total_iroas: metrics.total_iroas,
                    sp_iroas: metrics.sp_iroas,
                    sd_iroas: metrics.sd_iroas,
                    sb_iroas: metrics.sb_iroas,
                    dsp_iroas: metrics.dsp_iroas,
                }
            })
            .collect();
        weekly.sort_by_key(|row| row.report_date);
        Ok(weekly)
    }

    async fn insert_test_data(&self) -> Result<u64, StoreError> {
        self.check()?;
        let fixtures = FixtureSet::v1().unwrap();
        let seed = fixtures.seed_record().unwrap().clone();
        self.records.lock().unwrap().push(seed);
        Ok(1)
    }
}

/// Creates a router over the given store, with every origin allowed.
pub fn create_client(store: InMemoryStore) -> TestClient {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut registry = prometheus::Registry::new();
    Metrics::initialize(&mut registry).unwrap();
    let state = ServerState::new(Arc::new(store), registry);

    TestClient::new(create_router(state, cors_layer(&["*".to_string()])))
}
