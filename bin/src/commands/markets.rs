//! Markets command implementation.

use anyhow::Result;
use cookiecrumb_lib::prelude::*;

/// List the predefined market identifiers.
pub(crate) fn list_markets() -> Result<()> {
    println!("{:<12} {:<8} {:<16}", "ID", "REGION", "NAME");
    println!("{}", "-".repeat(36));

    for market in PredefinedMarket::all() {
        println!("{:<12} {:<8} {:<16}", market.as_str(), market.region(), market.name());
    }

    println!("\nTotal: {} markets", PredefinedMarket::all().len());
    Ok(())
}
