//! Handler for the community submission pipeline.
//!
//! `POST /api/v1/prompts/submit` runs the strictly-ordered sequence:
//! validate → verify CAPTCHA → generate id → sanitize and normalize →
//! create branch/commit/PR → confirmation email → respond. No external
//! side effect happens before validation and CAPTCHA verification both
//! pass, and the email step never fails the submission — by the time it
//! runs, the pull request already exists.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use suiteprompt_core::submission::{
    format_submission_as_prompt, generate_submission_id, validate_submission,
    SubmitPromptRequest,
};

use crate::error::{AppError, AppResult};
use crate::response::SubmitResponse;
use crate::state::AppState;

/// Message returned on a successful submission.
const SUCCESS_MESSAGE: &str = "Submission successful! Your prompt is now under review.";

/// POST /api/v1/prompts/submit
pub async fn submit_prompt(
    State(state): State<AppState>,
    Json(body): Json<SubmitPromptRequest>,
) -> AppResult<impl IntoResponse> {
    // 1. Schema + taxonomy validation; all violations reported together.
    let errors = validate_submission(&body, &state.taxonomy);
    if !errors.is_empty() {
        return Err(AppError::SubmissionValidation(errors));
    }

    // 2. CAPTCHA verification, before any external side effect.
    if !state.captcha.verify(&body.turnstile_token).await {
        return Err(AppError::CaptchaFailed);
    }

    // 3. Generate the submission id and sanitize identity fields. The
    //    submitter email stays out of the canonical record.
    let submission_id = generate_submission_id();
    let submission = body.sanitized();
    let submitter_email = submission.submitter_email.clone();

    let prompt = format_submission_as_prompt(&submission, &submission_id)?;

    // 4-8. Branch, commit, pull request, labels.
    let pull_request = state
        .github
        .create_submission_pr(&prompt, &submission.submitter_name)
        .await?;

    // 9. Best-effort confirmation email. Failure is logged, never surfaced:
    //    the pull request already exists.
    match &state.mailer {
        Some(mailer) => {
            if let Err(e) = mailer
                .send_submission_confirmation(
                    &submitter_email,
                    &prompt.title,
                    &pull_request.html_url,
                    pull_request.number,
                )
                .await
            {
                tracing::warn!(
                    error = %e,
                    pr = pull_request.number,
                    "Failed to send confirmation email"
                );
            }
        }
        None => {
            tracing::debug!("Email delivery not configured, skipping confirmation");
        }
    }

    tracing::info!(
        id = %submission_id,
        pr = pull_request.number,
        "Prompt submission accepted"
    );

    // 10. Success envelope with the PR handle.
    Ok(Json(SubmitResponse {
        success: true,
        pr_url: pull_request.html_url,
        pr_number: pull_request.number,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
