//! Endpoint URL construction.

use url::form_urlencoded;

/// Endpoint that issues the session cookie.
pub const COOKIE_URL: &str = "https://fc.yahoo.com";

/// Endpoint that exchanges the session cookie for a crumb.
pub const CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";

/// Base URL for data requests.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Fields requested from the market summary endpoint.
pub const SUMMARY_FIELDS: &str =
    "shortName,regularMarketPrice,regularMarketChange,regularMarketChangePercent";

/// Builds the quote URL for one or more symbols.
///
/// URL format: `{BASE_URL}/v7/finance/quote?symbols={A,B}&crumb={crumb}`
///
/// # Example
///
/// ```
/// use cookiecrumb_fetch::url::quote_url;
///
/// let url = quote_url(&["AAPL", "MSFT"], "abc/def");
/// assert_eq!(
///     url,
///     "https://query1.finance.yahoo.com/v7/finance/quote?symbols=AAPL%2CMSFT&crumb=abc%2Fdef"
/// );
/// ```
#[must_use]
pub fn quote_url<S: AsRef<str>>(symbols: &[S], crumb: &str) -> String {
    let symbols = symbols
        .iter()
        .map(|s| s.as_ref().trim().to_uppercase())
        .collect::<Vec<_>>()
        .join(",");
    with_query("/v7/finance/quote", &[("symbols", &symbols), ("crumb", crumb)])
}

/// Builds the market time URL used for market status.
#[must_use]
pub fn market_time_url(market: &str, crumb: &str) -> String {
    with_query(
        "/v6/finance/markettime",
        &[
            ("formatted", "true"),
            ("key", "finance"),
            ("lang", "en-US"),
            ("market", market),
            ("crumb", crumb),
        ],
    )
}

/// Builds the market summary URL.
#[must_use]
pub fn market_summary_url(market: &str, crumb: &str) -> String {
    with_query(
        "/v6/finance/quote/marketSummary",
        &[
            ("fields", SUMMARY_FIELDS),
            ("formatted", "false"),
            ("lang", "en-US"),
            ("market", market),
            ("crumb", crumb),
        ],
    )
}

fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{BASE_URL}{path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_url_single_symbol() {
        let url = quote_url(&["aapl"], "abc123");
        assert_eq!(
            url,
            "https://query1.finance.yahoo.com/v7/finance/quote?symbols=AAPL&crumb=abc123"
        );
    }

    #[test]
    fn test_crumb_is_percent_encoded() {
        let url = quote_url(&["AAPL"], "a/b+c");
        assert!(url.ends_with("crumb=a%2Fb%2Bc"));
    }

    #[test]
    fn test_market_time_url() {
        let url = market_time_url("us_market", "xyz");
        assert_eq!(
            url,
            "https://query1.finance.yahoo.com/v6/finance/markettime?formatted=true&key=finance&lang=en-US&market=us_market&crumb=xyz"
        );
    }

    #[test]
    fn test_market_summary_url() {
        let url = market_summary_url("gb_market", "xyz");
        assert!(url.starts_with("https://query1.finance.yahoo.com/v6/finance/quote/marketSummary?"));
        assert!(url.contains("fields=shortName%2CregularMarketPrice"));
        assert!(url.contains("formatted=false"));
        assert!(url.contains("market=gb_market"));
    }
}
