//! Market status and market summary records.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ApiError;
use crate::value::{f64_lenient, i64_lenient, null_default, opt_f64_lenient, opt_i64_lenient};

/// Trading hours and current state of a market.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketStatus {
    /// Market identifier (e.g. `us_market`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Market opening time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<DateTime<FixedOffset>>,

    /// Market closing time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<DateTime<FixedOffset>>,

    /// Timezone of the market.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<MarketTimezone>,

    /// Current market state (e.g. `REGULAR`, `CLOSED`, `PRE`, `POST`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Opening time exactly as returned by the API.
    #[serde(skip)]
    pub open_raw: String,

    /// Closing time exactly as returned by the API.
    #[serde(skip)]
    pub close_raw: String,
}

impl MarketStatus {
    /// Returns true if the market reports itself as open for regular trading.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.eq_ignore_ascii_case("REGULAR") || self.state.eq_ignore_ascii_case("OPEN")
    }
}

/// Timezone information attached to a market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTimezone {
    /// Offset from GMT in milliseconds.
    #[serde(
        rename = "gmtoffset",
        default,
        deserialize_with = "i64_lenient",
        skip_serializing_if = "is_zero"
    )]
    pub gmt_offset: i64,

    /// Short timezone name (e.g. `EST`).
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub short: String,

    /// Full timezone name (e.g. `America/New_York`).
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub long: String,
}

impl MarketTimezone {
    /// Returns the GMT offset as a chrono offset, if it is in range.
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        i32::try_from(self.gmt_offset / 1000)
            .ok()
            .and_then(FixedOffset::east_opt)
    }
}

const fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// A single index or asset in the market summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummaryItem {
    /// Exchange code (e.g. `SNP`, `DJI`).
    #[serde(default, deserialize_with = "null_default")]
    pub exchange: String,

    /// Ticker symbol.
    #[serde(default, deserialize_with = "null_default")]
    pub symbol: String,

    /// Short name of the index.
    #[serde(default, deserialize_with = "null_default")]
    pub short_name: String,

    /// Full exchange name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_exchange_name: Option<String>,

    /// Current market state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_state: Option<String>,

    /// Current price.
    #[serde(default, deserialize_with = "f64_lenient")]
    pub regular_market_price: f64,

    /// Price change since the previous close.
    #[serde(default, deserialize_with = "f64_lenient")]
    pub regular_market_change: f64,

    /// Percentage change since the previous close.
    #[serde(default, deserialize_with = "f64_lenient")]
    pub regular_market_change_percent: f64,

    /// Previous closing price.
    #[serde(
        default,
        deserialize_with = "opt_f64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_previous_close: Option<f64>,

    /// Unix time of the last regular market trade.
    #[serde(
        default,
        deserialize_with = "opt_i64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_time: Option<i64>,

    /// Quote type (e.g. `INDEX`, `EQUITY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<String>,

    /// Data update interval in seconds.
    #[serde(
        default,
        deserialize_with = "opt_i64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_interval: Option<i64>,

    /// Exchange data delay in seconds.
    #[serde(
        default,
        deserialize_with = "opt_i64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub exchange_data_delayed_by: Option<i64>,
}

/// Summary of all indices of a market, keyed by exchange code.
pub type MarketSummary = BTreeMap<String, MarketSummaryItem>;

/// Raw market summary response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSummaryResponse {
    /// Response body.
    #[serde(rename = "marketSummaryResponse", default)]
    pub market_summary_response: MarketSummaryBody,
}

/// Body of a [`MarketSummaryResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSummaryBody {
    /// Summary entries.
    #[serde(default, deserialize_with = "null_default")]
    pub result: Vec<MarketSummaryItem>,
    /// Error reported by the API, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Raw market time response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketTimeResponse {
    /// Response body.
    #[serde(default)]
    pub finance: MarketTimeFinance,
}

/// Body of a [`MarketTimeResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketTimeFinance {
    /// Market time groups.
    #[serde(rename = "marketTimes", default, deserialize_with = "null_default")]
    pub market_times: Vec<MarketTimes>,
    /// Error reported by the API, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// A group of market time entries for one market.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketTimes {
    /// Market identifier.
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    /// Market time entries.
    #[serde(rename = "marketTime", default, deserialize_with = "null_default")]
    pub market_time: Vec<MarketTimeEntry>,
}

/// A single raw market time entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketTimeEntry {
    /// Market identifier.
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    /// Opening time as an ISO-8601 string.
    #[serde(default, deserialize_with = "null_default")]
    pub open: String,
    /// Closing time as an ISO-8601 string.
    #[serde(default, deserialize_with = "null_default")]
    pub close: String,
    /// Timezone descriptors, loosely typed.
    #[serde(default, deserialize_with = "null_default")]
    pub timezone: Vec<Map<String, Value>>,
    /// Server time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Market status as reported by the API (e.g. `closed`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
