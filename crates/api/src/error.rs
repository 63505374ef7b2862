use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use suiteprompt_core::error::CoreError;
use suiteprompt_core::submission::FieldError;
use suiteprompt_github::GithubError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the submission-flow
/// variants with their fixed public envelopes. Implements [`IntoResponse`]
/// to produce consistent JSON error responses: catalog errors use the
/// `{error, code}` envelope, submission-flow errors the
/// `{success: false, error, details?}` contract.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `suiteprompt_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The submission payload failed schema validation. Carries every
    /// field violation, not just the first.
    #[error("Validation failed")]
    SubmissionValidation(Vec<FieldError>),

    /// The CAPTCHA token did not verify.
    #[error("CAPTCHA verification failed")]
    CaptchaFailed,

    /// A Git-hosting API failure from the submission pipeline.
    #[error(transparent)]
    Github(#[from] GithubError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants (catalog flow) ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} with id {id} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": msg, "code": "VALIDATION_ERROR" }),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({
                            "error": "An internal error occurred",
                            "code": "INTERNAL_ERROR",
                        }),
                    )
                }
            },

            // --- Submission flow ---
            AppError::SubmissionValidation(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": details,
                }),
            ),
            AppError::CaptchaFailed => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "CAPTCHA verification failed",
                }),
            ),
            AppError::Github(err) => classify_github_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Map a hosting API failure onto the submission endpoint's status
/// contract: timeouts surface as 504, rate limiting as 429, everything
/// else as a generic 500 with the original error kept server-side.
fn classify_github_error(err: &GithubError) -> (StatusCode, serde_json::Value) {
    if err.is_timeout() {
        return (
            StatusCode::GATEWAY_TIMEOUT,
            json!({
                "success": false,
                "error": "Request timed out. Please try again. Your data has been preserved.",
            }),
        );
    }

    if err.is_rate_limited() {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            json!({
                "success": false,
                "error": "GitHub API rate limit exceeded. Please try again in a few minutes.",
            }),
        );
    }

    tracing::error!(error = %err, "Submission PR creation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "success": false,
            "error": "Failed to create submission. Please try again.",
        }),
    )
}
