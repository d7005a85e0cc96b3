//! Predefined market identifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Commonly used market identifiers accepted by the market time and
/// market summary endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PredefinedMarket {
    /// United States.
    #[default]
    #[serde(rename = "us_market")]
    Us,
    /// United Kingdom.
    #[serde(rename = "gb_market")]
    Gb,
    /// Germany.
    #[serde(rename = "de_market")]
    De,
    /// France.
    #[serde(rename = "fr_market")]
    Fr,
    /// Japan.
    #[serde(rename = "jp_market")]
    Jp,
    /// Hong Kong.
    #[serde(rename = "hk_market")]
    Hk,
    /// China.
    #[serde(rename = "cn_market")]
    Cn,
    /// Canada.
    #[serde(rename = "ca_market")]
    Ca,
    /// Australia.
    #[serde(rename = "au_market")]
    Au,
    /// India.
    #[serde(rename = "in_market")]
    In,
    /// South Korea.
    #[serde(rename = "kr_market")]
    Kr,
    /// Brazil.
    #[serde(rename = "br_market")]
    Br,
}

impl PredefinedMarket {
    /// Returns the market identifier as sent to the API (e.g. `us_market`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us_market",
            Self::Gb => "gb_market",
            Self::De => "de_market",
            Self::Fr => "fr_market",
            Self::Jp => "jp_market",
            Self::Hk => "hk_market",
            Self::Cn => "cn_market",
            Self::Ca => "ca_market",
            Self::Au => "au_market",
            Self::In => "in_market",
            Self::Kr => "kr_market",
            Self::Br => "br_market",
        }
    }

    /// Returns the upper-case two-letter region code.
    #[must_use]
    pub const fn region(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Gb => "GB",
            Self::De => "DE",
            Self::Fr => "FR",
            Self::Jp => "JP",
            Self::Hk => "HK",
            Self::Cn => "CN",
            Self::Ca => "CA",
            Self::Au => "AU",
            Self::In => "IN",
            Self::Kr => "KR",
            Self::Br => "BR",
        }
    }

    /// Returns the human-readable country name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Us => "United States",
            Self::Gb => "United Kingdom",
            Self::De => "Germany",
            Self::Fr => "France",
            Self::Jp => "Japan",
            Self::Hk => "Hong Kong",
            Self::Cn => "China",
            Self::Ca => "Canada",
            Self::Au => "Australia",
            Self::In => "India",
            Self::Kr => "South Korea",
            Self::Br => "Brazil",
        }
    }

    /// Returns all predefined markets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Us,
            Self::Gb,
            Self::De,
            Self::Fr,
            Self::Jp,
            Self::Hk,
            Self::Cn,
            Self::Ca,
            Self::Au,
            Self::In,
            Self::Kr,
            Self::Br,
        ]
    }
}

impl std::fmt::Display for PredefinedMarket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for PredefinedMarket {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for PredefinedMarket {
    type Err = MarketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let code = lower.strip_suffix("_market").unwrap_or(&lower);
        Self::all()
            .iter()
            .copied()
            .find(|market| market.region().eq_ignore_ascii_case(code))
            .ok_or_else(|| MarketParseError(s.to_string()))
    }
}

/// Error returned when parsing an unknown market identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketParseError(String);

impl std::fmt::Display for MarketParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown market '{}', expected one of: us, gb, de, fr, jp, hk, cn, ca, au, in, kr, br",
            self.0
        )
    }
}

impl std::error::Error for MarketParseError {}
