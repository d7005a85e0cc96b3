//! Decoding of data endpoint responses.

use chrono::{DateTime, FixedOffset, Utc};
use cookiecrumb_types::{
    ApiError, MarketStatus, MarketSummary, MarketSummaryResponse, MarketTimeEntry,
    MarketTimeResponse, MarketTimezone, Quote, QuoteResponse,
};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while decoding a response body.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The body was not the expected JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The API returned an error object instead of data.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response decoded but carried no entries.
    #[error("Response contained no {0}")]
    Empty(&'static str),
}

/// Decodes a quote response.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON, carries an API error, or
/// contains no quotes.
pub fn parse_quotes(body: &str) -> Result<Vec<Quote>, ParseError> {
    let response: QuoteResponse = serde_json::from_str(body)?;
    let body = response.quote_response;
    if let Some(error) = body.error {
        return Err(error.into());
    }
    if body.result.is_empty() {
        return Err(ParseError::Empty("quotes"));
    }
    Ok(body.result)
}

/// Decodes a market summary response, keying entries by exchange code.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON, carries an API error, or
/// contains no entries.
pub fn parse_market_summary(body: &str) -> Result<MarketSummary, ParseError> {
    let response: MarketSummaryResponse = serde_json::from_str(body)?;
    let body = response.market_summary_response;
    if let Some(error) = body.error {
        return Err(error.into());
    }
    if body.result.is_empty() {
        return Err(ParseError::Empty("market summary entries"));
    }
    Ok(body
        .result
        .into_iter()
        .map(|item| (item.exchange.clone(), item))
        .collect())
}

/// Decodes a market time response into a [`MarketStatus`].
///
/// Only the first market time entry is used. When the API does not report a
/// status, the state is derived from `now` and the opening hours.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON, carries an API error, or
/// contains no market time entry.
pub fn parse_market_status(body: &str, now: DateTime<Utc>) -> Result<MarketStatus, ParseError> {
    let response: MarketTimeResponse = serde_json::from_str(body)?;
    let finance = response.finance;
    if let Some(error) = finance.error {
        return Err(error.into());
    }
    let entry = finance
        .market_times
        .into_iter()
        .next()
        .and_then(|times| times.market_time.into_iter().next())
        .ok_or(ParseError::Empty("market time entries"))?;

    Ok(status_from_entry(entry, now))
}

fn status_from_entry(entry: MarketTimeEntry, now: DateTime<Utc>) -> MarketStatus {
    let open = parse_time(&entry.open);
    let close = parse_time(&entry.close);
    let timezone = entry.timezone.first().map(timezone_from);
    let state = match entry.status.as_deref().map(str::trim) {
        Some(status) if !status.is_empty() => status.to_uppercase(),
        _ => derive_state(open, close, now).to_string(),
    };

    MarketStatus {
        id: entry.id,
        open,
        close,
        timezone,
        state,
        open_raw: entry.open,
        close_raw: entry.close,
    }
}

fn parse_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

/// Builds a timezone field by field so one malformed value does not discard
/// the others.
fn timezone_from(map: &Map<String, Value>) -> MarketTimezone {
    let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::trim);
    let gmt_offset = match map.get("gmtoffset") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    if gmt_offset.is_none() && map.contains_key("gmtoffset") {
        tracing::debug!(value = ?map.get("gmtoffset"), "ignoring malformed gmtoffset");
    }

    MarketTimezone {
        gmt_offset: gmt_offset.unwrap_or_default(),
        short: text("short").unwrap_or_default().to_string(),
        long: text("long")
            .filter(|long| !long.is_empty())
            .or_else(|| text("$text"))
            .unwrap_or_default()
            .to_string(),
    }
}

fn derive_state(
    open: Option<DateTime<FixedOffset>>,
    close: Option<DateTime<FixedOffset>>,
    now: DateTime<Utc>,
) -> &'static str {
    match (open, close) {
        (Some(open), Some(close))
            if open.with_timezone(&Utc) <= now && now < close.with_timezone(&Utc) =>
        {
            "REGULAR"
        }
        (Some(_), Some(_)) => "CLOSED",
        _ => "",
    }
}
