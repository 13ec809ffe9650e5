//! Error types for the Webdam client.

use thiserror::Error;

/// Result type alias for Webdam client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Webdam API.
#[derive(Debug, Error)]
pub enum Error {
    /// The token endpoint rejected the credentials, or a manually
    /// injected token expired and cannot be renewed. The message is the
    /// service's own description, e.g.
    /// `Invalid username and password combination (invalid_grant).`
    #[error("{0}")]
    InvalidCredentials(String),

    /// The upload pipeline failed before the asset was confirmed.
    #[error("Asset upload failed: {0}")]
    Upload(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response payload could not be decoded
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_displays_bare_message() {
        let err = Error::InvalidCredentials(
            "Invalid username and password combination (invalid_grant).".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Invalid username and password combination (invalid_grant)."
        );
    }

    #[test]
    fn upload_error_names_the_pipeline() {
        let err = Error::Upload("could not obtain presigned URL".to_string());
        assert_eq!(
            err.to_string(),
            "Asset upload failed: could not obtain presigned URL"
        );
    }
}
