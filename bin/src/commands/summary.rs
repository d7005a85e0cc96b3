//! Market summary command implementation.

use anyhow::{Context, Result};
use cookiecrumb_lib::prelude::*;

use crate::display::{Format, print_json, print_summary};

/// Fetch and print the index summary for a market.
pub(crate) async fn summary(config: ClientConfig, market: &str, format: Format) -> Result<()> {
    let market = super::parse_market(market)?;
    let client = super::connect(config).await?;
    let summary = client
        .market_summary(market)
        .await
        .with_context(|| format!("Failed to fetch summary for {market}"))?;

    match format {
        Format::Table => print_summary(&summary),
        Format::Json => print_json(&summary)?,
    }

    client.into_transport().close();
    Ok(())
}
