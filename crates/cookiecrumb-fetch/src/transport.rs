//! HTTP transport seam.
//!
//! Every request goes through a [`Transport`]. The default [`HttpTransport`]
//! is built on `reqwest`; tests script their own implementations.

use async_trait::async_trait;
use reqwest::{Client, Method, header::USER_AGENT};
use thiserror::Error;

use crate::ClientConfig;

/// Errors raised by a transport while performing a request.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a transport that is not backed by `reqwest`.
    #[error("Transport failure: {0}")]
    Failed(String),
}

/// Options for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// TLS fingerprint identity (JA3 string) the transport should present.
    pub fingerprint: Option<String>,
    /// Value of the `User-Agent` header.
    pub user_agent: Option<String>,
    /// Additional headers, sent in order.
    pub headers: Vec<(String, String)>,
    /// HTTP method.
    pub method: Method,
}

impl RequestOptions {
    /// Creates options for a bare GET request.
    #[must_use]
    pub const fn get() -> Self {
        Self {
            fingerprint: None,
            user_agent: None,
            headers: Vec::new(),
            method: Method::GET,
        }
    }

    /// Sets the TLS fingerprint identity.
    #[must_use]
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Appends a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first header with the given name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// Response returned by a transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in the order they were received. Repeated headers
    /// (such as `Set-Cookie`) appear once per occurrence.
    pub headers: Vec<(String, String)>,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Creates a response with the given status and body and no headers.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Appends a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first header with the given name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Returns every value of the header with the given name (case-insensitive).
    pub fn headers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Something that can perform HTTP requests with a browser identity.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request to `url` and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed. Non-2xx
    /// statuses are not errors at this layer.
    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError>;
}

/// Transport backed by a `reqwest` client using rustls.
///
/// The fingerprint identity in [`RequestOptions`] is recorded on the request
/// span but the handshake itself is whatever rustls negotiates.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport using the timeouts from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, TransportError> {
        Self::new(&ClientConfig::default())
    }

    /// Releases the transport and its pooled connections.
    pub fn close(self) {
        tracing::debug!("closing HTTP transport");
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(
        name = "http",
        skip_all,
        fields(
            url = %url,
            method = %options.method,
            fingerprint = options.fingerprint.as_deref().unwrap_or("none"),
        )
    )]
    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.client.request(options.method.clone(), url);
        if let Some(user_agent) = &options.user_agent {
            request = request.header(USER_AGENT, user_agent.as_str());
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        tracing::trace!(status, bytes = body.len(), "response received");
        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
