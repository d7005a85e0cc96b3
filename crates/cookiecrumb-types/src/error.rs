//! Error types shared across cookiecrumb crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::null_default;

/// Reason a crumb response was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrumbRejection {
    /// The response body was empty or whitespace only.
    #[error("crumb response was empty")]
    Empty,

    /// The response body contained an HTML tag, which means an error or
    /// challenge page was served instead of a token.
    #[error("crumb response looks like an HTML page")]
    Html,
}

/// Error object embedded in API response envelopes.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("API error {code}: {description}")]
pub struct ApiError {
    /// Machine-readable error code (e.g. `Unauthorized`).
    #[serde(default, deserialize_with = "null_default")]
    pub code: String,
    /// Human-readable description.
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
}
