//! Cookie and crumb acquisition.
//!
//! The flow is strictly sequential:
//!
//! 1. GET [`COOKIE_URL`] and keep the first `Set-Cookie` header.
//! 2. GET [`CRUMB_URL`] with that cookie and read the body.
//! 3. Reject the body if it is empty or an HTML page.
//!
//! A transport failure at either request aborts the whole sequence.

use cookiecrumb_types::{CrumbRejection, Session};
use thiserror::Error;

use crate::transport::{RequestOptions, Transport, TransportError, TransportResponse};
use crate::url::{COOKIE_URL, CRUMB_URL};
use crate::ClientConfig;

/// Step of the authentication flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Cookie request.
    Cookie,
    /// Crumb request.
    Crumb,
}

impl std::fmt::Display for SessionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cookie => write!(f, "cookie"),
            Self::Crumb => write!(f, "crumb"),
        }
    }
}

/// Errors that can occur while acquiring a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The transport failed. The sequence was aborted at `step`.
    #[error("{step} request failed: {source}")]
    Transport {
        /// Step at which the transport failed.
        step: SessionStep,
        /// Underlying transport error.
        #[source]
        source: TransportError,
    },

    /// The crumb response was not a usable token.
    #[error("crumb rejected: {0}")]
    Validation(#[from] CrumbRejection),
}

impl SessionError {
    /// Returns true if the flow halted because the crumb was rejected.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result of the cookie request.
#[derive(Debug, Clone)]
pub struct CookieResponse {
    /// Raw response.
    pub response: TransportResponse,
    /// Cookie to send on later requests. Empty if none was issued.
    pub cookie: String,
}

/// Acquires a session using the default client configuration.
///
/// # Errors
///
/// Returns [`SessionError::Transport`] if either request fails and
/// [`SessionError::Validation`] if the crumb is rejected.
pub async fn acquire_session<T>(transport: &T) -> Result<Session, SessionError>
where
    T: Transport + ?Sized,
{
    acquire_session_with(transport, &ClientConfig::default()).await
}

/// Acquires a session, presenting the identity from `config`.
///
/// # Errors
///
/// Returns [`SessionError::Transport`] if either request fails and
/// [`SessionError::Validation`] if the crumb is rejected.
pub async fn acquire_session_with<T>(
    transport: &T,
    config: &ClientConfig,
) -> Result<Session, SessionError>
where
    T: Transport + ?Sized,
{
    let CookieResponse { cookie, .. } = fetch_cookie(transport, config).await?;
    let response = fetch_crumb(transport, config, &cookie).await?;
    let crumb = validate_crumb(&response.body).inspect_err(|rejection| {
        tracing::warn!(status = response.status, %rejection, "crumb rejected");
    })?;

    tracing::info!(has_cookie = !cookie.is_empty(), "session acquired");
    Ok(Session::from_parts(cookie, crumb))
}

/// Performs the cookie request.
///
/// The response status is not checked: the cookie endpoint usually answers
/// with an error status while still setting the cookie.
///
/// # Errors
///
/// Returns [`SessionError::Transport`] if the request fails.
pub async fn fetch_cookie<T>(
    transport: &T,
    config: &ClientConfig,
) -> Result<CookieResponse, SessionError>
where
    T: Transport + ?Sized,
{
    let response = transport
        .send(COOKIE_URL, &request_options(config, None))
        .await
        .map_err(|source| SessionError::Transport {
            step: SessionStep::Cookie,
            source,
        })?;

    let cookie = cookie_from(&response);
    if cookie.is_empty() {
        tracing::warn!(status = response.status, "no Set-Cookie header in cookie response");
    } else {
        tracing::debug!(status = response.status, "session cookie issued");
    }
    Ok(CookieResponse { response, cookie })
}

/// Performs the crumb request, attaching `cookie` when it is non-empty.
///
/// The body is returned unvalidated; see [`validate_crumb`].
///
/// # Errors
///
/// Returns [`SessionError::Transport`] if the request fails.
pub async fn fetch_crumb<T>(
    transport: &T,
    config: &ClientConfig,
    cookie: &str,
) -> Result<TransportResponse, SessionError>
where
    T: Transport + ?Sized,
{
    let options = request_options(config, Some(cookie));
    let response = transport
        .send(CRUMB_URL, &options)
        .await
        .map_err(|source| SessionError::Transport {
            step: SessionStep::Crumb,
            source,
        })?;
    tracing::debug!(status = response.status, bytes = response.body.len(), "crumb response");
    Ok(response)
}

/// Returns the first `Set-Cookie` header value, or an empty string.
#[must_use]
pub fn cookie_from(response: &TransportResponse) -> String {
    response.header("set-cookie").unwrap_or_default().to_string()
}

/// Validates a crumb response body and returns the trimmed token.
///
/// # Errors
///
/// Returns [`CrumbRejection::Empty`] for an empty or whitespace-only body and
/// [`CrumbRejection::Html`] if the body contains an `<html` tag.
///
/// # Example
///
/// ```
/// use cookiecrumb_fetch::validate_crumb;
///
/// assert_eq!(validate_crumb(" abc123\n").unwrap(), "abc123");
/// assert!(validate_crumb("<html><body>Too Many Requests</body></html>").is_err());
/// ```
pub fn validate_crumb(body: &str) -> Result<&str, CrumbRejection> {
    let crumb = body.trim();
    if crumb.is_empty() {
        return Err(CrumbRejection::Empty);
    }
    if crumb.to_ascii_lowercase().contains("<html") {
        return Err(CrumbRejection::Html);
    }
    Ok(crumb)
}

/// Builds request options carrying the configured browser identity, plus a
/// `Cookie` header when `cookie` is non-empty.
#[must_use]
pub fn request_options(config: &ClientConfig, cookie: Option<&str>) -> RequestOptions {
    let options = RequestOptions::get()
        .with_fingerprint(config.fingerprint.as_str())
        .with_user_agent(config.user_agent.as_str())
        .with_header("Accept", "*/*")
        .with_header("Accept-Language", config.accept_language.as_str());
    match cookie {
        Some(cookie) if !cookie.is_empty() => options.with_header("Cookie", cookie),
        _ => options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedTransport;

    fn cookie_reply(name: &str, value: &str) -> TransportResponse {
        TransportResponse::new(404, "").with_header(name, value)
    }

    #[tokio::test]
    async fn test_acquire_session_success() {
        let transport = ScriptedTransport::new()
            .reply(cookie_reply("Set-Cookie", "X"))
            .reply(TransportResponse::new(200, "abc123"));

        let session = acquire_session(&transport).await.unwrap();
        assert_eq!(session.cookie(), Some("X"));
        assert_eq!(session.crumb(), Some("abc123"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, COOKIE_URL);
        assert_eq!(requests[0].options.header("cookie"), None);
        assert_eq!(requests[1].url, CRUMB_URL);
        assert_eq!(requests[1].options.header("Cookie"), Some("X"));
    }

    #[tokio::test]
    async fn test_set_cookie_match_is_case_insensitive() {
        for name in ["set-cookie", "Set-Cookie", "SET-COOKIE"] {
            let transport = ScriptedTransport::new()
                .reply(cookie_reply(name, "B=1"))
                .reply(TransportResponse::new(200, "crumb"));
            let session = acquire_session(&transport).await.unwrap();
            assert_eq!(session.cookie(), Some("B=1"), "header name {name}");
        }
    }

    #[tokio::test]
    async fn test_missing_cookie_sends_no_cookie_header() {
        let transport = ScriptedTransport::new()
            .reply(TransportResponse::new(404, ""))
            .reply(TransportResponse::new(200, "abc123"));

        let session = acquire_session(&transport).await.unwrap();
        assert_eq!(session.cookie(), None);
        assert_eq!(session.crumb(), Some("abc123"));
        assert_eq!(transport.requests()[1].options.header("cookie"), None);
    }

    #[tokio::test]
    async fn test_html_crumb_is_rejected() {
        let transport = ScriptedTransport::new()
            .reply(cookie_reply("Set-Cookie", "X"))
            .reply(TransportResponse::new(200, "<html><body>blocked</body></html>"));

        let err = acquire_session(&transport).await.unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, SessionError::Validation(CrumbRejection::Html)));
    }

    #[tokio::test]
    async fn test_blank_crumb_is_rejected() {
        for body in ["", "   \n\t"] {
            let transport = ScriptedTransport::new()
                .reply(cookie_reply("Set-Cookie", "X"))
                .reply(TransportResponse::new(200, body));
            let err = acquire_session(&transport).await.unwrap_err();
            assert!(matches!(err, SessionError::Validation(CrumbRejection::Empty)));
        }
    }

    #[tokio::test]
    async fn test_cookie_transport_error_aborts_sequence() {
        let transport = ScriptedTransport::new().fail("connection reset");

        let err = acquire_session(&transport).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Transport {
                step: SessionStep::Cookie,
                ..
            }
        ));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_crumb_transport_error_is_fatal() {
        let transport = ScriptedTransport::new()
            .reply(cookie_reply("Set-Cookie", "X"))
            .fail("tls handshake failed");

        let err = acquire_session(&transport).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "crumb request failed: Transport failure: tls handshake failed");
    }

    #[test]
    fn test_validate_crumb_trims() {
        assert_eq!(validate_crumb("  abc123 \r\n"), Ok("abc123"));
        assert_eq!(validate_crumb("<HTML>"), Err(CrumbRejection::Html));
        assert_eq!(validate_crumb(""), Err(CrumbRejection::Empty));
    }

    #[test]
    fn test_request_options_carry_identity() {
        let config = ClientConfig::default();
        let options = request_options(&config, Some(""));
        assert_eq!(options.user_agent.as_deref(), Some(config.user_agent.as_str()));
        assert_eq!(options.fingerprint.as_deref(), Some(config.fingerprint.as_str()));
        assert_eq!(options.header("accept"), Some("*/*"));
        assert_eq!(options.header("accept-language"), Some("en-US,en;q=0.5"));
        assert_eq!(options.header("cookie"), None);
    }
}
