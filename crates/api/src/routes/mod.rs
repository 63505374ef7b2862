pub mod catalog;
pub mod health;
pub mod submissions;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prompts                     list prompts (filter/sort query params)
/// /prompts/business-areas      distinct business areas among prompts
/// /prompts/submit              community submission (POST)
/// /prompts/{id}                prompt detail
/// /prompts/{id}/related        related prompts
///
/// /skills                      list skills
/// /skills/business-areas       distinct business areas among skills
/// /skills/{id}                 skill detail
/// /skills/{id}/related         related skills
///
/// /taxonomy                    submission-category configuration
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/prompts",
            catalog::prompts_router().merge(submissions::router()),
        )
        .nest("/skills", catalog::skills_router())
        .route("/taxonomy", get(handlers::catalog::get_taxonomy))
}
