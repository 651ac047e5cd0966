//! A connection to the store's HTTP interface.
//!
//! A connection is opened for each unit of work and dropped afterwards. The underlying
//! client keeps no idle sockets, so nothing outlives the request that used it.

use incrementality_configuration::values::RetrySettings;
use incrementality_configuration::ConnectionSettings;
use query_engine_sql::sql::string::{DDL, SQL};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};

use crate::error::Error;
use crate::metrics::Metrics;

const USER_HEADER: &str = "X-ClickHouse-User";
const KEY_HEADER: &str = "X-ClickHouse-Key";
const PING_RESPONSE: &str = "Ok.";

pub struct Connection {
    client: reqwest::Client,
    settings: ConnectionSettings,
}

#[derive(Deserialize)]
struct DatabaseRow {
    name: String,
}

impl Connection {
    /// Prepare a connection. No request is made until the first statement.
    ///
    /// `read_timeout` bounds each whole request, from sending the statement to reading the
    /// last byte of the response.
    pub fn open(settings: &ConnectionSettings) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.read_timeout)
            .pool_max_idle_per_host(0)
            .danger_accept_invalid_certs(settings.secure && !settings.verify_tls)
            .gzip(settings.compression)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// Check that the store answers its health probe.
    pub async fn ping(&self) -> Result<(), Error> {
        let url = format!("{}ping", self.settings.endpoint());
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Store {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }
        if body.trim() != PING_RESPONSE {
            return Err(Error::UnexpectedPing(body));
        }
        Ok(())
    }

    /// Run a read statement and decode every returned row.
    pub async fn fetch_rows<T: DeserializeOwned>(&self, query: &SQL) -> Result<Vec<T>, Error> {
        let body = format!("{} FORMAT JSONEachRow", query.sql);
        let text = self
            .post(body, query, &[("output_format_json_quote_64bit_integers", "0")])
            .await?;

        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|source| Error::Decode {
                    line: index + 1,
                    source,
                })
            })
            .collect()
    }

    /// Run a statement that returns nothing.
    pub async fn execute_ddl(&self, ddl: &DDL) -> Result<(), Error> {
        let DDL(statement) = ddl;
        self.post(statement.sql.clone(), statement, &[]).await?;
        Ok(())
    }

    /// Send rows as the data of an INSERT statement, one JSON object per line.
    pub async fn insert_rows<T: Serialize>(&self, insert: &SQL, rows: &[T]) -> Result<u64, Error> {
        let mut body = insert.sql.clone();
        body.push('\n');
        for row in rows {
            body.push_str(&serde_json::to_string(row).map_err(Error::Encode)?);
            body.push('\n');
        }

        self.post(body, insert, &[("input_format_null_as_default", "0")])
            .await?;
        Ok(rows.len() as u64)
    }

    /// The names of every database on the server.
    pub async fn show_databases(&self, query: &SQL) -> Result<Vec<String>, Error> {
        let rows: Vec<DatabaseRow> = self.fetch_rows(query).await?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    async fn post(
        &self,
        body: String,
        statement: &SQL,
        settings: &[(&str, &str)],
    ) -> Result<String, Error> {
        let query_id = uuid::Uuid::new_v4().to_string();

        let mut url_params: Vec<(String, String)> = vec![("query_id".to_string(), query_id.clone())];
        if self.settings.compression {
            url_params.push(("enable_http_compression".to_string(), "1".to_string()));
        }
        url_params.extend(
            settings
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string())),
        );
        url_params.extend(
            statement
                .named_params()
                .map(|(name, value)| (format!("param_{name}"), value)),
        );

        let request = self
            .client
            .post(self.settings.endpoint())
            .header(USER_HEADER, &self.settings.user)
            .header(KEY_HEADER, &self.settings.password)
            .query(&url_params)
            .body(body);

        async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            if status.is_success() {
                Ok(text)
            } else {
                tracing::warn!(query_id, status = status.as_u16(), "statement failed");
                Err(Error::Store {
                    status: status.as_u16(),
                    message: text.trim().to_string(),
                })
            }
        }
        .instrument(info_span!("Store request", query_id))
        .await
    }
}

/// Open a connection and ping the store, retrying as configured. Every attempt is counted,
/// including the failed ones.
pub async fn connect_with_retry(
    settings: &ConnectionSettings,
    retry: &RetrySettings,
    metrics: &Metrics,
) -> Result<Connection, Error> {
    let mut last_error = None;

    for attempt in 1..=retry.attempts {
        metrics.connection_attempts_total.inc();
        let result = match Connection::open(settings) {
            Ok(connection) => connection.ping().await.map(|()| connection),
            Err(error) => Err(error),
        };
        match result {
            Ok(connection) => {
                tracing::info!(host = settings.host, port = settings.port, "connected to store");
                return Ok(connection);
            }
            Err(error) => {
                tracing::warn!(attempt, attempts = retry.attempts, %error, "unable to reach store");
                last_error = Some(error);
                if attempt < retry.attempts {
                    tokio::time::sleep(retry.delay()).await;
                }
            }
        }
    }

    Err(Error::Unavailable {
        attempts: retry.attempts,
        last: Box::new(last_error.unwrap_or(Error::UnexpectedPing(String::new()))),
    })
}
