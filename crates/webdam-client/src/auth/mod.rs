//! OAuth2 token lifecycle for the Webdam API.
//!
//! Tracks the access token, its absolute expiry, and the refresh token
//! for one client instance. Nothing is persisted: a caller that wants a
//! session to survive a restart reads it back via
//! [`WebdamClient::auth_state`](crate::client::WebdamClient::auth_state)
//! and re-injects it with
//! [`set_manual_token`](crate::client::WebdamClient::set_manual_token).

use std::fmt;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::WebdamConfig;
use crate::error::{Error, Result};
use crate::util::{compact_text, unix_timestamp_now};

/// Read-only snapshot of a client's authentication state.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthState {
    /// Whether an access token is present and unexpired right now.
    pub valid: bool,
    pub access_token: Option<String>,
    /// Unix timestamp (seconds) at which the access token expires.
    pub expires_at: Option<i64>,
    pub refresh_token: Option<String>,
}

impl fmt::Debug for AuthState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthState")
            .field("valid", &self.valid)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expires_at", &self.expires_at)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Mutable token state owned by a client instance.
#[derive(Default)]
pub(crate) struct TokenState {
    access_token: Option<String>,
    expires_at: Option<i64>,
    refresh_token: Option<String>,
    manual: bool,
}

impl TokenState {
    /// Snapshot the state, computing validity against the current clock.
    pub(crate) fn snapshot(&self) -> AuthState {
        let valid = match (&self.access_token, self.expires_at) {
            (Some(_), Some(expires_at)) => unix_timestamp_now() < expires_at,
            _ => false,
        };
        AuthState {
            valid,
            access_token: self.access_token.clone(),
            expires_at: self.expires_at,
            refresh_token: self.refresh_token.clone(),
        }
    }

    /// Install an externally obtained token pair and mark the session as
    /// manually managed. Any previously held refresh token is replaced,
    /// including by `None`.
    pub(crate) fn set_manual(
        &mut self,
        access_token: String,
        expires_at: i64,
        refresh_token: Option<String>,
    ) {
        self.access_token = Some(access_token);
        self.expires_at = Some(expires_at);
        self.refresh_token = refresh_token;
        self.manual = true;
    }

    /// Fold a successful token-endpoint response into the state.
    ///
    /// The service only issues a refresh token on the first grant of a
    /// session lineage, so a response without one keeps the token
    /// already held.
    fn apply_grant(&mut self, granted: TokenResponse) {
        self.access_token = Some(granted.access_token);
        self.expires_at = Some(unix_timestamp_now().saturating_add(granted.expires_in));
        if let Some(refresh_token) = granted.refresh_token {
            self.refresh_token = Some(refresh_token);
        }
    }
}

/// Ensure `state` holds an unexpired access token and return it.
///
/// Decision order: an unexpired token is reused without a network call;
/// an expired one is renewed with the refresh-token grant when a refresh
/// token is held; a manually injected session without a refresh token is
/// refused; anything else falls back to the password grant.
pub(crate) async fn ensure_token(
    http: &Client,
    config: &WebdamConfig,
    state: &mut TokenState,
) -> Result<String> {
    if let (Some(token), Some(expires_at)) = (&state.access_token, state.expires_at) {
        if unix_timestamp_now() < expires_at {
            return Ok(token.clone());
        }
    }

    let grant = if let Some(refresh_token) = state.refresh_token.clone() {
        tracing::debug!("access token missing or expired, using refresh-token grant");
        Grant::Refresh { refresh_token }
    } else if state.manual {
        return Err(Error::InvalidCredentials(
            "Manually set access token has expired and cannot be renewed without a refresh token."
                .to_string(),
        ));
    } else {
        tracing::debug!("no usable access token, using password grant");
        Grant::Password
    };

    let granted = request_token(http, config, &grant).await?;
    let token = granted.access_token.clone();
    state.apply_grant(granted);
    Ok(token)
}

enum Grant {
    Password,
    Refresh { refresh_token: String },
}

async fn request_token(
    http: &Client,
    config: &WebdamConfig,
    grant: &Grant,
) -> Result<TokenResponse> {
    let mut form: Vec<(&str, &str)> = match grant {
        Grant::Password => vec![
            ("grant_type", "password"),
            ("username", config.username.as_str()),
            ("password", config.password.as_str()),
        ],
        Grant::Refresh { refresh_token } => vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ],
    };
    form.push(("client_id", config.client_id.as_str()));
    form.push(("client_secret", config.client_secret.as_str()));

    let response = http
        .post(format!("{}/oauth2/token", config.base_url))
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    if status.is_client_error() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("token endpoint rejected the grant with HTTP {status}");
        return Err(Error::InvalidCredentials(parse_token_error(status, &body)));
    }

    let response = response.error_for_status()?;
    Ok(response.json::<TokenResponse>().await?)
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

fn parse_token_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<TokenErrorResponse>(body) {
        if let (Some(error), Some(description)) = (payload.error, payload.error_description) {
            return format!("{} ({}).", description.trim(), error.trim());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", compact_text(trimmed), status.as_u16())
    }
}
