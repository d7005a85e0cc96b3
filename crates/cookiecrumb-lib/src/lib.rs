//! Client for market status and quote data behind a cookie and crumb handshake.
//!
//! This is a facade crate that re-exports functionality from the cookiecrumb
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use cookiecrumb_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let transport = HttpTransport::new(&config)?;
//!     let client = MarketClient::connect(transport, config).await?;
//!
//!     let status = client.market_status(PredefinedMarket::Us).await?;
//!     println!("{} is {}", status.id, status.state);
//!
//!     for quote in client.quotes(&["AAPL", "MSFT"]).await? {
//!         println!("{}: {:?}", quote.symbol, quote.regular_market_price);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cookiecrumb-rs/cookiecrumb/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use cookiecrumb_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use cookiecrumb_fetch::{
    ClientConfig, CookieResponse, FetchError, HttpTransport, MarketClient, ParseError,
    RequestOptions, SessionError, SessionStep, Transport, TransportError, TransportResponse,
    acquire_session, acquire_session_with, fetch_cookie, fetch_crumb, validate_crumb,
};

#[cfg(feature = "fetch")]
pub use cookiecrumb_fetch::url;

/// Prelude module for convenient imports.
///
/// ```
/// use cookiecrumb_lib::prelude::*;
/// ```
pub mod prelude {
    pub use cookiecrumb_types::{
        MarketStatus, MarketSummary, MarketSummaryItem, MarketTimezone, PredefinedMarket, Quote,
        Session,
    };

    #[cfg(feature = "fetch")]
    pub use cookiecrumb_fetch::{
        ClientConfig, FetchError, HttpTransport, MarketClient, SessionError, Transport,
        TransportResponse, acquire_session,
    };
}
