//! Error type and failure classification for the hosting API client.

/// Error type for Git-hosting API failures.
///
/// Classification feeds the API layer's status mapping: [`Timeout`]
/// surfaces as 504, [`RateLimited`] as 429, everything else as 500.
/// Classification prefers the HTTP client's structured signals; the one
/// message inspection left is primary rate limiting, which the hosting API
/// reports as a plain 403.
///
/// [`Timeout`]: GithubError::Timeout
/// [`RateLimited`]: GithubError::RateLimited
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    /// The request timed out before the hosting API responded.
    #[error("GitHub API request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The hosting API rejected the request due to rate limiting.
    #[error("GitHub API rate limit exceeded (HTTP {status}): {message}")]
    RateLimited { status: u16, message: String },

    /// The hosting API returned a non-success status.
    #[error("GitHub API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The underlying HTTP request failed (network, DNS, TLS, body decode).
    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The submission record could not be serialized for commit.
    #[error("Failed to serialize submission record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GithubError {
    /// Build the transport-level variant, splitting out timeouts.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Request(err)
        }
    }

    /// Build the API-level variant from a response status and message,
    /// splitting out rate limiting.
    ///
    /// HTTP 429 is always rate limiting; primary rate limits arrive as 403
    /// with a message naming the limit.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        let rate_limited =
            status == 429 || (status == 403 && message.to_lowercase().contains("rate limit"));
        if rate_limited {
            Self::RateLimited { status, message }
        } else {
            Self::Api { status, message }
        }
    }

    /// Whether this failure should surface as a gateway timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Whether this failure should surface as a rate-limit rejection.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_is_rate_limited() {
        let err = GithubError::from_status(429, "too many requests".into());
        assert!(err.is_rate_limited());
    }

    #[test]
    fn status_403_with_rate_limit_message_is_rate_limited() {
        let err = GithubError::from_status(403, "API rate limit exceeded for 1.2.3.4".into());
        assert!(err.is_rate_limited());
    }

    #[test]
    fn status_403_without_rate_limit_message_is_api_error() {
        let err = GithubError::from_status(403, "Resource not accessible by integration".into());
        assert!(!err.is_rate_limited());
        assert!(matches!(err, GithubError::Api { status: 403, .. }));
    }

    #[test]
    fn status_422_is_api_error() {
        let err = GithubError::from_status(422, "Reference already exists".into());
        assert!(!err.is_rate_limited());
        assert!(!err.is_timeout());
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = GithubError::from_status(422, "Validation Failed".into());
        assert_eq!(
            err.to_string(),
            "GitHub API error (HTTP 422): Validation Failed"
        );
    }
}
