//! Session acquisition and data fetching for the cookiecrumb market data client.
//!
//! This crate provides the request pipeline:
//!
//! - [`Transport`] - Request seam, with the `reqwest`-backed [`HttpTransport`]
//! - [`acquire_session`] - Cookie → crumb authentication flow
//! - [`url`] - Endpoint URL construction
//! - [`MarketClient`] - Quote, market status and market summary requests
//! - [`parse_market_status`] / [`parse_market_summary`] / [`parse_quotes`] - Response decoding

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cookiecrumb-rs/cookiecrumb/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
#[cfg(test)]
mod mock;
mod parse;
mod session;
mod transport;
pub mod url;

pub use client::{
    ClientConfig, DEFAULT_FINGERPRINT, DEFAULT_USER_AGENT, FetchError, MarketClient,
};
pub use parse::{ParseError, parse_market_status, parse_market_summary, parse_quotes};
pub use session::{
    CookieResponse, SessionError, SessionStep, acquire_session, acquire_session_with,
    cookie_from, fetch_cookie, fetch_crumb, request_options, validate_crumb,
};
pub use transport::{
    HttpTransport, RequestOptions, Transport, TransportError, TransportResponse,
};

pub use reqwest::Method;
