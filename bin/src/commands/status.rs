//! Market status command implementation.

use anyhow::{Context, Result};
use cookiecrumb_lib::prelude::*;

use crate::display::{Format, print_json, print_status};

/// Fetch and print trading hours and state for a market.
pub(crate) async fn status(config: ClientConfig, market: &str, format: Format) -> Result<()> {
    let market = super::parse_market(market)?;
    let client = super::connect(config).await?;
    let status = client
        .market_status(market)
        .await
        .with_context(|| format!("Failed to fetch status for {market}"))?;

    match format {
        Format::Table => print_status(&status),
        Format::Json => print_json(&status)?,
    }

    client.into_transport().close();
    Ok(())
}
