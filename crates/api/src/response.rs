//! Shared response envelope types for API handlers.
//!
//! Catalog responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization. The submission
//! endpoint has its own envelope, [`SubmitResponse`], matching the public
//! API contract.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Success envelope of `POST /api/v1/prompts/submit`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub pr_url: String,
    pub pr_number: u64,
    pub message: String,
}
