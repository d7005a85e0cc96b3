//! Quote records returned by the v7 quote endpoint.

use serde::{Deserialize, Serialize};

use crate::ApiError;
use crate::value::{null_default, opt_f64_lenient, opt_i64_lenient};

/// Snapshot quote for a single symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    #[serde(default, deserialize_with = "null_default")]
    pub symbol: String,

    /// Short display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Long display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Trading currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Exchange code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// Quote type (e.g. `EQUITY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<String>,

    /// Market state at the time of the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_state: Option<String>,

    /// Last regular market price.
    #[serde(
        default,
        deserialize_with = "opt_f64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_price: Option<f64>,

    /// Change since the previous close.
    #[serde(
        default,
        deserialize_with = "opt_f64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_change: Option<f64>,

    /// Percentage change since the previous close.
    #[serde(
        default,
        deserialize_with = "opt_f64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_change_percent: Option<f64>,

    /// Regular session volume.
    #[serde(
        default,
        deserialize_with = "opt_i64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_volume: Option<i64>,

    /// Session high.
    #[serde(
        default,
        deserialize_with = "opt_f64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_day_high: Option<f64>,

    /// Session low.
    #[serde(
        default,
        deserialize_with = "opt_f64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_day_low: Option<f64>,

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
}

impl Quote {
    /// Returns the best available display name, falling back to the symbol.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.long_name.as_deref())
            .unwrap_or(&self.symbol)
    }
}

/// Raw quote response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Response body.
    #[serde(rename = "quoteResponse", default)]
    pub quote_response: QuoteResponseBody,
}

/// Body of a [`QuoteResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponseBody {
    /// Quotes, one per requested symbol that the API recognized.
    #[serde(default, deserialize_with = "null_default")]
    pub result: Vec<Quote>,
    /// Error reported by the API, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_response_decodes() {
        let json = r#"{"quoteResponse":{"result":[{
            "symbol":"AAPL",
            "shortName":"Apple Inc.",
            "currency":"USD",
            "regularMarketPrice":185.92,
            "regularMarketVolume":46692400,
            "regularMarketTime":1704402001,
            "someUnknownField":true
        }],"error":null}}"#;
        let resp: QuoteResponse = serde_json::from_str(json).unwrap();
        let quote = &resp.quote_response.result[0];
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.display_name(), "Apple Inc.");
        assert_eq!(quote.regular_market_price, Some(185.92));
        assert_eq!(quote.regular_market_volume, Some(46_692_400));
        assert!(resp.quote_response.error.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_symbol() {
        let quote = Quote {
            symbol: "XYZ".into(),
            ..Default::default()
        };
        assert_eq!(quote.display_name(), "XYZ");
    }
}
