//! Rows as read from the store and as returned to clients.
//!
//! Field order is the order keys appear in responses.

use chrono::NaiveDate;
use query_engine_execution::deserialize;
use serde::{Deserialize, Serialize};

/// Payload of the health endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Health {
    pub fn current() -> Self {
        Health {
            status: "healthy",
            service: "incrementality backend",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// An entry of the brand listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSummary {
    #[serde(deserialize_with = "deserialize::number_or_string")]
    pub brand_id: u64,
    pub brand_name: String,
    #[serde(
        rename = "totalIroas",
        default,
        deserialize_with = "deserialize::optional_number_or_string"
    )]
    pub total_iroas: Option<f64>,
    #[serde(
        rename = "spIroas",
        default,
        deserialize_with = "deserialize::optional_number_or_string"
    )]
    pub sp_iroas: Option<f64>,
    #[serde(
        rename = "sdIroas",
        default,
        deserialize_with = "deserialize::optional_number_or_string"
    )]
    pub sd_iroas: Option<f64>,
    #[serde(
        rename = "sbIroas",
        default,
        deserialize_with = "deserialize::optional_number_or_string"
    )]
    pub sb_iroas: Option<f64>,
    #[serde(
        rename = "dspIroas",
        default,
        deserialize_with = "deserialize::optional_number_or_string"
    )]
    pub dsp_iroas: Option<f64>,
}

/// The iROAS figures of a single report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IroasMetrics {
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub total_iroas: Option<f64>,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub sp_iroas: Option<f64>,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub sd_iroas: Option<f64>,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub sb_iroas: Option<f64>,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub dsp_iroas: Option<f64>,
}

/// One point of a brand's weekly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyIroas {
    pub report_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub total_iroas: Option<f64>,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub sp_iroas: Option<f64>,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub sd_iroas: Option<f64>,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub sb_iroas: Option<f64>,
    #[serde(default, deserialize_with = "deserialize::optional_number_or_string")]
    pub dsp_iroas: Option<f64>,
}
