//! Route definitions for the submission pipeline.

use axum::routing::post;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Submission routes, merged into the `/prompts` subtree.
///
/// ```text
/// POST /submit -> submit_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/submit", post(submissions::submit_prompt))
}
