use std::sync::Arc;

use suiteprompt_catalog::Catalog;
use suiteprompt_core::taxonomy::Taxonomy;
use suiteprompt_github::GithubClient;
use suiteprompt_notify::EmailDelivery;

use crate::captcha::TurnstileVerifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Immutable catalog snapshot, loaded once at startup.
    pub catalog: Arc<Catalog>,
    /// Submission-category taxonomy, loaded once at startup.
    pub taxonomy: Arc<Taxonomy>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Git-hosting API client for the submission pipeline.
    pub github: Arc<GithubClient>,
    /// CAPTCHA token verifier.
    pub captcha: Arc<TurnstileVerifier>,
    /// Confirmation-email delivery; `None` when SMTP is not configured.
    pub mailer: Option<Arc<EmailDelivery>>,
}
