//! Quote command implementation.

use anyhow::{Context, Result};
use cookiecrumb_lib::prelude::*;

use crate::display::{Format, print_json, print_quotes};

/// Fetch and print quotes for the given symbols.
pub(crate) async fn quote(config: ClientConfig, symbols: &[String], format: Format) -> Result<()> {
    let client = super::connect(config).await?;
    let quotes = client
        .quotes(symbols)
        .await
        .with_context(|| format!("Failed to fetch quotes for {}", symbols.join(",")))?;

    match format {
        Format::Table => print_quotes(&quotes),
        Format::Json => print_json(&quotes)?,
    }

    client.into_transport().close();
    Ok(())
}
