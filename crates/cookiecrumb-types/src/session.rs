//! Authenticated session state.

/// Cookie and crumb pair obtained by the authentication flow.
///
/// A session starts empty, is filled in by the cookie and crumb requests, and
/// lives only as long as the client that owns it. It is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    cookie: Option<String>,
    crumb: Option<String>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cookie: None,
            crumb: None,
        }
    }

    /// Creates a session from a cookie and crumb.
    ///
    /// Empty strings are stored as absent values.
    #[must_use]
    pub fn from_parts(cookie: impl Into<String>, crumb: impl Into<String>) -> Self {
        Self::new().with_cookie(cookie).with_crumb(crumb)
    }

    /// Sets the session cookie. An empty cookie clears it.
    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = non_empty(cookie.into());
        self
    }

    /// Sets the crumb token. An empty crumb clears it.
    #[must_use]
    pub fn with_crumb(mut self, crumb: impl Into<String>) -> Self {
        self.crumb = non_empty(crumb.into());
        self
    }

    /// Returns the session cookie, if one was issued.
    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Returns the crumb token, if one was obtained.
    #[must_use]
    pub fn crumb(&self) -> Option<&str> {
        self.crumb.as_deref()
    }

    /// Returns true once a crumb is available for data requests.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.crumb.is_some()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
