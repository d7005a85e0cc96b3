//! Debug command implementation.
//!
//! Walks through the authentication flow one request at a time and prints
//! every response, then issues a single quote request with the crumb.

use anyhow::{Context, Result};
use cookiecrumb_lib::prelude::*;
use cookiecrumb_lib::url::{COOKIE_URL, CRUMB_URL, quote_url};
use cookiecrumb_lib::{fetch_cookie, fetch_crumb, validate_crumb};

use crate::display::preview;

/// Characters of the quote body printed before truncation.
const BODY_PREVIEW: usize = 500;

/// Run the step-by-step authentication flow.
pub(crate) async fn debug(config: ClientConfig, symbol: &str) -> Result<()> {
    println!("=== Debug: Authentication Flow ===\n");

    let transport = HttpTransport::new(&config).context("Failed to create HTTP client")?;

    // Step 1: cookie
    println!("Step 1: GET {COOKIE_URL}");
    let step = fetch_cookie(&transport, &config)
        .await
        .context("Failed to get cookie")?;
    println!("Status: {}", step.response.status);
    println!("Headers:");
    for (name, value) in &step.response.headers {
        println!("  {name}: {value}");
    }
    if step.cookie.is_empty() {
        println!("Set-Cookie: (none)");
    } else {
        println!("Set-Cookie: {}", step.cookie);
    }
    println!();

    // Step 2: crumb
    println!("Step 2: GET {CRUMB_URL}");
    let response = fetch_crumb(&transport, &config, &step.cookie)
        .await
        .context("Failed to get crumb")?;
    println!("Status: {}", response.status);
    println!("Body: {}", response.body);
    println!(
        "Is HTML: {}",
        response.body.to_ascii_lowercase().contains("<html")
    );

    let crumb = match validate_crumb(&response.body) {
        Ok(crumb) => crumb.to_string(),
        Err(rejection) => {
            tracing::warn!(%rejection, "stopping after crumb step");
            println!("\nCrumb fetch failed! ({rejection})");
            transport.close();
            return Ok(());
        }
    };
    println!("\nCrumb: {crumb}\n");

    // Step 3: data request with the crumb
    println!("Step 3: Test Quote API");
    let client =
        MarketClient::from_session(transport, config, Session::from_parts(step.cookie, crumb));
    let url = quote_url(&[symbol], client.session().crumb().unwrap_or_default());
    let response = client.fetch_raw(&url).await.context("Failed to get quote")?;
    println!("Status: {}", response.status);
    match preview(&response.body, BODY_PREVIEW) {
        Some(head) => println!("Body (truncated): {head}"),
        None => println!("Body: {}", response.body),
    }

    client.into_transport().close();
    println!("\n=== Debug Complete ===");
    Ok(())
}
