use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Secret;

/// Host name of the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Host(pub Secret);

impl From<String> for Host {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Host {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct User(pub Secret);

impl From<String> for User {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for User {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Password(pub Secret);

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// Database holding the incrementality tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct DatabaseName(pub Secret);

impl From<String> for DatabaseName {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for DatabaseName {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
