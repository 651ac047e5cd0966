use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How often to retry reaching the store before giving up, used at startup and by the
/// fixture loader. Request handlers never retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetrySettings {
    /// total number of attempts
    #[serde(default = "attempts_default")]
    pub attempts: u32,
    /// delay between attempts (milliseconds)
    #[serde(default = "delay_ms_default")]
    pub delay_ms: u64,
}

impl RetrySettings {
    pub fn is_default(&self) -> bool {
        *self == RetrySettings::default()
    }

    pub fn delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.delay_ms)
    }
}

impl Default for RetrySettings {
    fn default() -> RetrySettings {
        RetrySettings {
            attempts: 3,
            delay_ms: 2000,
        }
    }
}

// for serde default //
fn attempts_default() -> u32 {
    RetrySettings::default().attempts
}
fn delay_ms_default() -> u64 {
    RetrySettings::default().delay_ms
}
