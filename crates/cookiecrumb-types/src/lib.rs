//! Core types for the cookiecrumb market data client.
//!
//! This crate provides the data structures shared by the cookiecrumb crates:
//!
//! - [`Session`] - Cookie and crumb pair produced by the authentication flow
//! - [`MarketStatus`] / [`MarketSummary`] - Decoded market time and summary data
//! - [`Quote`] - Snapshot quote records
//! - [`PredefinedMarket`] - Commonly used market identifiers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cookiecrumb-rs/cookiecrumb/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod market;
mod predefined;
mod quote;
mod session;
mod value;

pub use error::{ApiError, CrumbRejection};
pub use market::{
    MarketStatus, MarketSummary, MarketSummaryBody, MarketSummaryItem, MarketSummaryResponse,
    MarketTimeEntry, MarketTimeFinance, MarketTimeResponse, MarketTimes, MarketTimezone,
};
pub use predefined::{MarketParseError, PredefinedMarket};
pub use quote::{Quote, QuoteResponse, QuoteResponseBody};
pub use session::Session;
