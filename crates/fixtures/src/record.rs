//! Typed rows of the fact table and the brand dimension.

use chrono::{NaiveDate, NaiveDateTime};
use query_engine_execution::deserialize;
use serde::{Deserialize, Serialize};

/// One row of the incrementality fact table. Fields are declared in column order, which is
/// also the order they are serialized in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementalityRecord {
    #[serde(deserialize_with = "deserialize::number_or_string")]
    pub brand_original_id: u64,
    pub report_date: NaiveDate,
    pub date: NaiveDate,
    pub year: u16,
    pub month: u8,
    pub week: u32,
    pub quarter: u8,
    #[serde(with = "datetime_format")]
    pub update_timestamp: NaiveDateTime,
    pub updated_by: String,
    pub sp_branded_search_pct: f64,
    pub sb_branded_pct: f64,
    pub sp_ntb_pct: f64,
    pub dsp_ntb_pct: f64,
    pub glance_view_pct: f64,
    pub ctr: f64,
    pub discount: Option<f64>,
    pub keyword_similarity: Option<f64>,
    pub sov_weighted: Option<f64>,
    pub organic_ranking: Option<f64>,
    pub amazon_brand_ranking: Option<f64>,
    pub repeated_purchase: f64,
    pub spend_weight: f64,
    pub sp_branded_search_pct_weight: f64,
    pub sb_branded_pct_weight: f64,
    pub sp_ntb_pct_weight: f64,
    pub dsp_ntb_pct_weight: f64,
    pub glance_view_pct_weight: f64,
    pub ctr_weight: f64,
    pub discount_weight: f64,
    pub keyword_similarity_weight: f64,
    pub sov_weighted_weight: f64,
    pub organic_ranking_weight: f64,
    pub amazon_brand_ranking_weight: f64,
    pub repeated_purchase_weight: f64,
    pub total_iroas: f64,
    pub sp_iroas: f64,
    pub sd_iroas: Option<f64>,
    pub sb_iroas: f64,
    pub dsp_iroas: Option<f64>,
    pub total_iroas_factor: f64,
    pub sp_iroas_factor: f64,
    pub sd_iroas_factor: Option<f64>,
    pub sb_iroas_factor: f64,
    pub dsp_iroas_factor: Option<f64>,
    pub total_attributed_sales: f64,
    pub sp_attributed_sales: f64,
    pub sd_attributed_sales: Option<f64>,
    pub sb_attributed_sales: f64,
    pub dsp_attributed_sales: Option<f64>,
    pub total_azattributed_sales: f64,
    pub sp_azattributed_sales: f64,
    pub sd_azattributed_sales: Option<f64>,
    pub sb_azattributed_sales: f64,
    pub dsp_azattributed_sales: Option<f64>,
    pub sp_spend: f64,
    pub sd_spend: Option<f64>,
    pub sb_spend: f64,
    pub dsp_spend: Option<f64>,
    pub cac: f64,
    pub total_spend: f64,
    pub total_sales: f64,
    pub baseline_share: f64,
    pub sp_attributed_share: f64,
    pub sb_attributed_share: f64,
    pub sd_attributed_share: Option<f64>,
    pub dsp_attributed_share: Option<f64>,
    pub sp_coef: f64,
    pub sb_coef: f64,
    pub sd_coef: Option<f64>,
    pub dsp_coef: Option<f64>,
    pub other_coef: f64,
    pub sp_lagweight: f64,
    pub sd_lagweight: Option<f64>,
    pub sb_lagweight: f64,
    pub dsp_lagweight: Option<f64>,
    pub sp_halfmax: f64,
    pub sd_halfmax: Option<f64>,
    pub sb_halfmax: f64,
    pub dsp_halfmax: Option<f64>,
    pub sp_slope: f64,
    pub sd_slope: Option<f64>,
    pub sb_slope: f64,
    pub dsp_slope: Option<f64>,
    pub status: u16,
    #[serde(deserialize_with = "deserialize::number_or_string")]
    pub version: u64,
    pub sign: i8,
    #[serde(rename = "_insert_time", with = "datetime_format")]
    pub insert_time: NaiveDateTime,
}

/// One row of the brand dimension table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRecord {
    #[serde(deserialize_with = "deserialize::number_or_string")]
    pub brand_id: u64,
    pub brand_name: String,
    #[serde(rename = "totalIroas")]
    pub total_iroas: Option<f64>,
    #[serde(rename = "spIroas")]
    pub sp_iroas: Option<f64>,
    #[serde(rename = "sdIroas")]
    pub sd_iroas: Option<f64>,
    #[serde(rename = "sbIroas")]
    pub sb_iroas: Option<f64>,
    #[serde(rename = "dspIroas")]
    pub dsp_iroas: Option<f64>,
}

/// `DateTime` columns travel as `YYYY-MM-DD hh:mm:ss`.
pub(crate) mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}
