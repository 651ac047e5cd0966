//! Runtime configuration for the service.

use std::fmt;
use std::time::Duration;

use query_engine_metadata::metadata;

use crate::values::RetrySettings;

/// The 'Configuration' type collects all the information necessary to serve requests at runtime.
///
/// 'ParsedConfiguration' is the serialized format on disk, in which secrets may still refer to
/// environment variables. Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which resolves every secret.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
    pub connection: ConnectionSettings,
    pub retry: RetrySettings,
}

/// Fully resolved settings for connecting to the store.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Use https rather than plain http.
    pub secure: bool,
    /// Reject invalid certificates when `secure` is set.
    pub verify_tls: bool,
    pub connect_timeout: Duration,
    /// Bounds each whole request, not only the time spent reading.
    pub read_timeout: Duration,
    /// Ask the store to compress responses.
    pub compression: bool,
}

impl ConnectionSettings {
    /// Base URL of the store's HTTP interface.
    pub fn endpoint(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{scheme}://{}:{}/", self.host, self.port)
    }
}

// The password never ends up in logs.
impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("secure", &self.secure)
            .field("verify_tls", &self.verify_tls)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("compression", &self.compression)
            .finish()
    }
}
