//! CLI command implementations.

pub(crate) mod debug;
pub(crate) mod markets;
pub(crate) mod quote;
pub(crate) mod status;
pub(crate) mod summary;

use anyhow::{Context, Result};
use cookiecrumb_lib::prelude::*;

/// Creates the HTTP transport and acquires a session.
pub(crate) async fn connect(config: ClientConfig) -> Result<MarketClient<HttpTransport>> {
    let transport = HttpTransport::new(&config).context("Failed to create HTTP client")?;
    MarketClient::connect(transport, config)
        .await
        .context("Failed to acquire session")
}

/// Parses a market identifier or region code.
pub(crate) fn parse_market(market: &str) -> Result<PredefinedMarket> {
    Ok(market.parse::<PredefinedMarket>()?)
}
