//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::environment;

#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("{file_path}: unsupported configuration version {found}, expected {expected}")]
    UnsupportedVersion {
        file_path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("cannot resolve {setting}: {source}")]
    MissingEnvironmentVariable {
        setting: &'static str,
        #[source]
        source: environment::Error,
    },
    #[error("invalid value for {setting}: {message}")]
    InvalidValue {
        setting: &'static str,
        message: String,
    },
}
