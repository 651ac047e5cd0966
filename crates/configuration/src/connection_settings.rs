//! Database connection settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::values::{DatabaseName, Host, Password, Secret, User};

pub const DEFAULT_HOST_VARIABLE: &str = "CLICKHOUSE_HOST";
pub const DEFAULT_USER_VARIABLE: &str = "CLICKHOUSE_USER";
pub const DEFAULT_PASSWORD_VARIABLE: &str = "CLICKHOUSE_PASSWORD";
pub const DEFAULT_DATABASE_VARIABLE: &str = "CLICKHOUSE_DATABASE";

/// Database connection settings, as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    pub host: Host,
    #[serde(default = "port_default")]
    pub port: u16,
    pub user: User,
    pub password: Password,
    pub database: DatabaseName,
    /// Connect over https.
    #[serde(default)]
    pub secure: bool,
    /// Verify the server certificate when connecting over https.
    #[serde(default = "verify_tls_default")]
    pub verify_tls: bool,
    /// Timeout for establishing a connection (seconds).
    #[serde(default = "connect_timeout_default")]
    pub connect_timeout_secs: u64,
    /// Timeout for a whole statement request, from sending it to reading the last byte of the
    /// response (seconds).
    #[serde(default = "read_timeout_default")]
    pub read_timeout_secs: u64,
    /// Request compressed responses.
    #[serde(default = "compression_default")]
    pub compression: bool,
}

impl DatabaseConnectionSettings {
    /// Settings that read every secret from the default environment variables.
    pub fn empty() -> Self {
        Self {
            host: Host(Secret::from_environment(DEFAULT_HOST_VARIABLE)),
            port: port_default(),
            user: User(Secret::from_environment(DEFAULT_USER_VARIABLE)),
            password: Password(Secret::from_environment(DEFAULT_PASSWORD_VARIABLE)),
            database: DatabaseName(Secret::from_environment(DEFAULT_DATABASE_VARIABLE)),
            secure: false,
            verify_tls: verify_tls_default(),
            connect_timeout_secs: connect_timeout_default(),
            read_timeout_secs: read_timeout_default(),
            compression: compression_default(),
        }
    }
}

fn port_default() -> u16 {
    8123
}
fn verify_tls_default() -> bool {
    true
}
fn connect_timeout_default() -> u64 {
    10
}
fn read_timeout_default() -> u64 {
    300
}
fn compression_default() -> bool {
    true
}
