//! Authenticated client for the data endpoints.

use std::time::Duration;

use cookiecrumb_types::{MarketStatus, MarketSummary, Quote, Session};
use thiserror::Error;

use crate::parse::{ParseError, parse_market_status, parse_market_summary, parse_quotes};
use crate::session::{SessionError, acquire_session_with, request_options};
use crate::transport::{Transport, TransportError, TransportResponse};
use crate::url::{market_summary_url, market_time_url, quote_url};

/// Chrome 120 on Windows.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// JA3 fingerprint of the Chrome 120 TLS client hello.
pub const DEFAULT_FINGERPRINT: &str = "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513,29-23-24,0";

/// Maximum number of body characters kept in a [`FetchError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

/// Configuration for the transport and the browser identity it presents.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// TLS fingerprint identity (JA3 string).
    pub fingerprint: String,
    /// Value of the `Accept-Language` header.
    pub accept_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fingerprint: DEFAULT_FINGERPRINT.to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
        }
    }
}

impl ClientConfig {
    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the TLS fingerprint identity.
    #[must_use]
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = fingerprint.into();
        self
    }
}

/// Errors that can occur when fetching data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The session could not be acquired.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The transport failed on a data request.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("Server returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Start of the response body.
        body: String,
    },

    /// The response body could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The client holds no crumb.
    #[error("No crumb available, acquire a session first")]
    NotAuthenticated,
}

/// Client that performs data requests with an acquired session.
///
/// The client owns its transport; dropping the client (or calling
/// [`MarketClient::into_transport`]) releases it.
#[derive(Debug)]
pub struct MarketClient<T> {
    transport: T,
    config: ClientConfig,
    session: Session,
}

impl<T: Transport> MarketClient<T> {
    /// Acquires a session over `transport` and returns a ready client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Session`] if the cookie or crumb step fails.
    pub async fn connect(transport: T, config: ClientConfig) -> Result<Self, FetchError> {
        let session = acquire_session_with(&transport, &config).await?;
        Ok(Self::from_session(transport, config, session))
    }

    /// Creates a client from an already acquired session.
    #[must_use]
    pub const fn from_session(transport: T, config: ClientConfig, session: Session) -> Self {
        Self {
            transport,
            config,
            session,
        }
    }

    /// Returns the session in use.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Consumes the client and returns its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Sends a GET to `url` with the session cookie and browser identity,
    /// returning the response whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the request fails.
    pub async fn fetch_raw(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let options = request_options(&self.config, self.session.cookie());
        Ok(self.transport.send(url, &options).await?)
    }

    /// Fetches quotes for `symbols`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body cannot be decoded.
    pub async fn quotes<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Vec<Quote>, FetchError> {
        let url = quote_url(symbols, self.crumb()?);
        let body = self.fetch_ok(&url).await?;
        Ok(parse_quotes(&body)?)
    }

    /// Fetches trading hours and state for `market`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body cannot be decoded.
    pub async fn market_status(&self, market: impl AsRef<str>) -> Result<MarketStatus, FetchError> {
        let url = market_time_url(market.as_ref(), self.crumb()?);
        let body = self.fetch_ok(&url).await?;
        Ok(parse_market_status(&body, chrono::Utc::now())?)
    }

    /// Fetches the index summary for `market`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body cannot be decoded.
    pub async fn market_summary(
        &self,
        market: impl AsRef<str>,
    ) -> Result<MarketSummary, FetchError> {
        let url = market_summary_url(market.as_ref(), self.crumb()?);
        let body = self.fetch_ok(&url).await?;
        Ok(parse_market_summary(&body)?)
    }

    fn crumb(&self) -> Result<&str, FetchError> {
        self.session.crumb().ok_or(FetchError::NotAuthenticated)
    }

    async fn fetch_ok(&self, url: &str) -> Result<String, FetchError> {
        let response = self.fetch_raw(url).await?;
        if !response.is_success() {
            tracing::warn!(status = response.status, url, "data request failed");
            return Err(FetchError::Status {
                status: response.status,
                body: response.body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }
        tracing::debug!(status = response.status, url, bytes = response.body.len(), "data response");
        Ok(response.body)
    }
}
