//! Route definitions for catalog browsing.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Prompt routes mounted at `/prompts`.
///
/// ```text
/// GET /                   -> list_prompts
/// GET /business-areas     -> prompt_business_areas
/// GET /{id}               -> get_prompt
/// GET /{id}/related       -> related_prompts
/// ```
pub fn prompts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_prompts))
        .route("/business-areas", get(catalog::prompt_business_areas))
        .route("/{id}", get(catalog::get_prompt))
        .route("/{id}/related", get(catalog::related_prompts))
}

/// Skill routes mounted at `/skills`.
///
/// ```text
/// GET /                   -> list_skills
/// GET /business-areas     -> skill_business_areas
/// GET /{id}               -> get_skill
/// GET /{id}/related       -> related_skills
/// ```
pub fn skills_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_skills))
        .route("/business-areas", get(catalog::skill_business_areas))
        .route("/{id}", get(catalog::get_skill))
        .route("/{id}/related", get(catalog::related_skills))
}
