//! CAPTCHA token verification against the Turnstile challenge service.
//!
//! Verification is a server-to-server POST of `{secret, response}`; the
//! service answers `{"success": bool}`. Any non-success body, network
//! error, or timeout counts as a verification failure — a submission is
//! never accepted on the benefit of the doubt.

use std::time::Duration;

use serde_json::json;

/// Default verification endpoint.
pub const DEFAULT_VERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// HTTP request timeout for a verification attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the CAPTCHA verifier.
#[derive(Debug, Clone)]
pub struct TurnstileConfig {
    /// Verification endpoint URL.
    pub verify_url: String,
    /// Server-side secret key.
    pub secret: String,
}

impl TurnstileConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable               | Required | Default                    |
    /// |------------------------|----------|----------------------------|
    /// | `TURNSTILE_SECRET_KEY` | yes      | —                          |
    /// | `TURNSTILE_VERIFY_URL` | no       | Cloudflare siteverify URL  |
    pub fn from_env() -> Self {
        Self {
            verify_url: std::env::var("TURNSTILE_VERIFY_URL")
                .unwrap_or_else(|_| DEFAULT_VERIFY_URL.to_string()),
            secret: std::env::var("TURNSTILE_SECRET_KEY")
                .expect("TURNSTILE_SECRET_KEY must be set"),
        }
    }
}

/// Verifies CAPTCHA tokens with the challenge service.
pub struct TurnstileVerifier {
    client: reqwest::Client,
    config: TurnstileConfig,
}

impl TurnstileVerifier {
    /// Create a verifier with a pre-configured HTTP client.
    pub fn new(config: TurnstileConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Verify a token. Returns `false` on any failure.
    pub async fn verify(&self, token: &str) -> bool {
        let body = json!({
            "secret": self.config.secret,
            "response": token,
        });

        let response = match self
            .client
            .post(&self.config.verify_url)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "CAPTCHA verification request failed");
                return false;
            }
        };

        match response.json::<serde_json::Value>().await {
            Ok(data) => data["success"].as_bool().unwrap_or(false),
            Err(e) => {
                tracing::warn!(error = %e, "CAPTCHA verification response unreadable");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_verifier_fails_closed() {
        let verifier = TurnstileVerifier::new(TurnstileConfig {
            verify_url: "http://127.0.0.1:9/siteverify".into(),
            secret: "secret".into(),
        });
        assert!(!verifier.verify("any-token").await);
    }
}
