pub mod common;

use axum::http::StatusCode;
use axum_test_helper::TestClient;

use incrementality_configuration::values::RetrySettings;
use incrementality_configuration::Configuration;
use incrementality_server::{cors_layer, create_router, create_state, ClickHouseStore, Store};
use query_engine_execution::metrics::Metrics;
use query_engine_metadata::metadata::Metadata;
use query_engine_translation::translation::query::{BrandSearch, DateRange};
use tests_common::fake_store::{self, FakeStore};

fn configuration_for(store: &FakeStore) -> Configuration {
    Configuration {
        metadata: Metadata::new(fake_store::DATABASE),
        connection: store.connection_settings(),
        retry: RetrySettings {
            attempts: 1,
            delay_ms: 0,
        },
    }
}

fn clickhouse_store(store: &FakeStore) -> ClickHouseStore {
    ClickHouseStore::new(configuration_for(store), Metrics::unregistered().unwrap())
}

#[tokio::test]
async fn brand_search_binds_id_and_pattern() {
    let store = FakeStore::start(|_| {
        (
            StatusCode::OK,
            "{\"brand_id\":\"42\",\"brand_name\":\"Acme 42\",\"totalIroas\":1.5,\"spIroas\":null,\"sdIroas\":null,\"sbIroas\":null,\"dspIroas\":null}\n"
                .to_string(),
        )
    })
    .await;
    let search = BrandSearch::parse("42").unwrap();

    let brands = clickhouse_store(&store).brands(Some(&search)).await.unwrap();

    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].brand_id, 42);
    assert_eq!(brands[0].total_iroas, Some(1.5));

    let statement = &store.statements()[0];
    assert!(statement.body.contains("ILIKE"));
    assert_eq!(statement.param("param_p1"), Some("42"));
    assert_eq!(statement.param("param_p2"), Some("%42%"));
}

#[tokio::test]
async fn no_rows_means_no_metrics() {
    let store = FakeStore::accepting().await;
    let metrics = clickhouse_store(&store).latest_metrics(1).await.unwrap();
    assert_eq!(metrics, None);
}

#[tokio::test]
async fn weekly_range_is_bound_as_dates() {
    let store = FakeStore::start(|_| {
        (
            StatusCode::OK,
            "{\"reportDate\":\"2022-01-03\",\"totalIroas\":0.9859,\"spIroas\":1.3473,\"sdIroas\":null,\"sbIroas\":0.631,\"dspIroas\":null}\n".to_string(),
        )
    })
    .await;
    let range = DateRange {
        start: chrono::NaiveDate::from_ymd_opt(2022, 1, 1),
        end: chrono::NaiveDate::from_ymd_opt(2022, 12, 31),
    };

    let rows = clickhouse_store(&store)
        .weekly_metrics(common::FIRST_BRAND, &range)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sd_iroas, None);

    let statement = &store.statements()[0];
    assert!(statement.body.contains("BETWEEN"));
    assert_eq!(statement.param("param_p2"), Some("2022-01-01"));
    assert_eq!(statement.param("param_p3"), Some("2022-12-31"));
}

#[tokio::test]
async fn test_data_creates_the_schema_then_inserts_the_seed() {
    let store = FakeStore::accepting().await;

    let inserted = clickhouse_store(&store).insert_test_data().await.unwrap();
    assert_eq!(inserted, 1);

    let bodies: Vec<String> = store
        .statements()
        .into_iter()
        .map(|request| request.body)
        .collect();
    assert_eq!(bodies.len(), 4);
    assert!(bodies[0].starts_with("CREATE DATABASE"));
    assert!(bodies[1].starts_with("CREATE TABLE"));
    assert!(bodies[2].starts_with("CREATE TABLE"));
    assert!(bodies[3].starts_with("INSERT INTO"));
    assert_eq!(bodies[3].lines().count(), 2);
    assert!(bodies[3].contains("\"totalIroas\":0.9859"));
}

#[tokio::test]
async fn every_call_opens_its_own_connection() {
    let store = FakeStore::accepting().await;
    let metrics = Metrics::unregistered().unwrap();
    let clickhouse = ClickHouseStore::new(configuration_for(&store), metrics.clone());

    clickhouse.latest_metrics(1).await.unwrap();
    clickhouse.latest_metrics(2).await.unwrap();

    assert_eq!(metrics.connection_attempts_total.get(), 2);
    assert_eq!(metrics.query_total.get(), 2);
}

#[tokio::test]
async fn server_over_the_fake_store() {
    let store = FakeStore::start(|request| {
        if request.body.contains("LIMIT 1") {
            (
                StatusCode::OK,
                "{\"totalIroas\":0.9859,\"spIroas\":1.3473,\"sdIroas\":null,\"sbIroas\":0.631,\"dspIroas\":null}\n".to_string(),
            )
        } else {
            (StatusCode::OK, String::new())
        }
    })
    .await;

    let state = create_state(configuration_for(&store), prometheus::Registry::new())
        .await
        .unwrap();
    let client = TestClient::new(create_router(state, cors_layer(&[])));

    let response = client
        .get(&format!("/api/v1/metrics/{}", common::FIRST_BRAND))
        .send()
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await;
    assert_eq!(body["data"]["totalIroas"], serde_json::json!(0.9859));
    assert_eq!(body["data"]["sdIroas"], serde_json::Value::Null);

    // the startup ping plus one statement
    assert_eq!(store.requests().len(), 2);
}

#[tokio::test]
async fn startup_fails_when_the_store_is_unreachable() {
    let configuration = Configuration {
        metadata: Metadata::new(fake_store::DATABASE),
        connection: fake_store::unreachable_connection_settings(),
        retry: RetrySettings {
            attempts: 2,
            delay_ms: 10,
        },
    };
    let result = create_state(configuration, prometheus::Registry::new()).await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "needs a running ClickHouse; set CLICKHOUSE_HOST, CLICKHOUSE_USER, CLICKHOUSE_PASSWORD and CLICKHOUSE_DATABASE"]
async fn seeded_metrics_from_a_live_store() {
    use incrementality_configuration::environment::ProcessEnvironment;
    use incrementality_configuration::{make_runtime_configuration, ParsedConfiguration};

    let configuration =
        make_runtime_configuration(ParsedConfiguration::initial(), ProcessEnvironment).unwrap();
    let state = create_state(configuration, prometheus::Registry::new())
        .await
        .unwrap();
    let client = TestClient::new(create_router(state, cors_layer(&[])));

    let response = client.post("/api/v1/test-data").send().await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(&format!("/api/v1/metrics/{}", common::FIRST_BRAND))
        .send()
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}
