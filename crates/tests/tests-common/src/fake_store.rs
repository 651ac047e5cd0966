//! A stand-in for the store's HTTP interface that records every request.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;

use incrementality_configuration::ConnectionSettings;

pub const USER: &str = "tester";
pub const PASSWORD: &str = "not-a-secret";
pub const DATABASE: &str = "incrementality";

/// One request as the fake store saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub params: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

type Responder = dyn Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync;

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Responder>,
}

pub struct FakeStore {
    pub address: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeStore {
    /// Start a fake store on a free local port. Pings are always answered; every other
    /// request is answered by `responder`.
    pub async fn start(
        responder: impl Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
    ) -> FakeStore {
        let _ = env_logger::builder().is_test(true).try_init();

        let requests = Arc::new(Mutex::new(vec![]));
        let state = FakeState {
            requests: requests.clone(),
            responder: Arc::new(responder),
        };
        let router = Router::new().fallback(record).with_state(state);

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let server = axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router.into_make_service());
        tokio::spawn(server);

        FakeStore { address, requests }
    }

    /// A store that accepts every statement and returns no rows.
    pub async fn accepting() -> FakeStore {
        Self::start(|_| (StatusCode::OK, String::new())).await
    }

    /// Every request received so far, pings included.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Every statement received so far, pings excluded.
    pub fn statements(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path != "/ping")
            .collect()
    }

    pub fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            host: self.address.ip().to_string(),
            port: self.address.port(),
            user: USER.to_string(),
            password: PASSWORD.to_string(),
            database: DATABASE.to_string(),
            secure: false,
            verify_tls: true,
            connect_timeout: Duration::from_secs(2),
            read_timeout: Duration::from_secs(5),
            compression: false,
        }
    }
}

/// Settings pointing at a port nothing listens on.
pub fn unreachable_connection_settings() -> ConnectionSettings {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    ConnectionSettings {
        host: "127.0.0.1".to_string(),
        port,
        user: USER.to_string(),
        password: PASSWORD.to_string(),
        database: DATABASE.to_string(),
        secure: false,
        verify_tls: true,
        connect_timeout: Duration::from_millis(200),
        read_timeout: Duration::from_millis(200),
        compression: false,
    }
}

async fn record(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    body: String,
) -> (StatusCode, String) {
    let request = RecordedRequest {
        method,
        path: uri.path().to_string(),
        params,
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect(),
        body,
    };
    state.requests.lock().unwrap().push(request.clone());

    if request.path == "/ping" {
        (StatusCode::OK, "Ok.\n".to_string())
    } else {
        (state.responder)(&request)
    }
}
