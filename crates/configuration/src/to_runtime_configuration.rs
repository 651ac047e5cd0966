//! Resolve the parsed configuration into the settings used at runtime.

use std::time::Duration;

use query_engine_metadata::metadata;

use crate::configuration::{Configuration, ConnectionSettings};
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::Secret;
use crate::version1::ParsedConfiguration;

/// Convert the parsed configuration into the runtime configuration, resolving every secret
/// against the given environment.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let settings = parsed_config.connection_settings;

    let host = resolve(&settings.host.0, "host", &environment)?;
    if host.trim().is_empty() {
        return Err(MakeRuntimeConfigurationError::InvalidValue {
            setting: "host",
            message: "must not be empty".to_string(),
        });
    }
    let user = resolve(&settings.user.0, "user", &environment)?;
    let password = resolve(&settings.password.0, "password", &environment)?;
    let database = resolve(&settings.database.0, "database", &environment)?;
    if database.trim().is_empty() {
        return Err(MakeRuntimeConfigurationError::InvalidValue {
            setting: "database",
            message: "must not be empty".to_string(),
        });
    }

    if parsed_config.retry_settings.attempts == 0 {
        return Err(MakeRuntimeConfigurationError::InvalidValue {
            setting: "retrySettings.attempts",
            message: "must be at least 1".to_string(),
        });
    }

    Ok(Configuration {
        metadata: metadata::Metadata::new(database.clone()),
        connection: ConnectionSettings {
            host,
            port: settings.port,
            user,
            password,
            database,
            secure: settings.secure,
            verify_tls: settings.verify_tls,
            connect_timeout: Duration::from_secs(settings.connect_timeout_secs),
            read_timeout: Duration::from_secs(settings.read_timeout_secs),
            compression: settings.compression,
        },
        retry: parsed_config.retry_settings,
    })
}

fn resolve(
    secret: &Secret,
    setting: &'static str,
    environment: &impl Environment,
) -> Result<String, MakeRuntimeConfigurationError> {
    match secret {
        Secret::Plain(value) => Ok(value.clone()),
        Secret::FromEnvironment { variable } => environment
            .read(variable)
            .map_err(|source| MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                setting,
                source,
            }),
    }
}
