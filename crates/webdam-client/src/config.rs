//! Client configuration.

use std::fmt;

use crate::error::{Error, Result};
use crate::util::is_http_url;

/// Base URL of the production Webdam API.
pub const DEFAULT_BASE_URL: &str = "https://apiv2.webdamdb.com";

/// `User-Agent` attached to every authenticated API request.
pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Credentials and endpoint settings for a
/// [`WebdamClient`](crate::client::WebdamClient).
///
/// The password grant needs all four credential fields. `Debug` output
/// redacts the password and client secret.
#[derive(Clone)]
pub struct WebdamConfig {
    /// Base URL of the Webdam REST API, without a trailing slash.
    pub base_url: String,
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
    /// OAuth2 client id issued for the integration.
    pub client_id: String,
    /// OAuth2 client secret issued for the integration.
    pub client_secret: String,
}

impl WebdamConfig {
    /// Configuration pointing at the production API.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Point the client at a different API host, e.g. a staging
    /// environment or a local stub.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for WebdamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdamConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Validate and normalize a base URL: trims whitespace, strips trailing
/// slashes, and requires an http(s) scheme.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config("base URL must not be empty".to_string()));
    }
    if !is_http_url(trimmed) {
        return Err(Error::Config(format!(
            "base URL must start with http:// or https://, got {trimmed}"
        )));
    }
    Ok(trimmed.to_string())
}
