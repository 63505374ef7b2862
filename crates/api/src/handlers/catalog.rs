//! Handlers for catalog browsing: listing, detail, related items, and the
//! taxonomy configuration.
//!
//! Query parameters arrive in their wire (camelCase) spelling. Enum-valued
//! parameters are parsed explicitly so a malformed value surfaces as a 400
//! with the offending value named, rather than an opaque deserialization
//! rejection.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use suiteprompt_catalog::query::DEFAULT_RELATED_LIMIT;
use suiteprompt_core::error::CoreError;
use suiteprompt_core::item::{FilterOptions, PromptFormat, SortBy, TargetPlatform};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Filter/sort parameters for the list endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogListParams {
    pub format: Option<String>,
    pub business_area: Option<String>,
    pub target_platform: Option<String>,
    pub search: Option<String>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<String>,
    /// Comma-separated tag list, e.g. `?tags=invoices,accounting`.
    pub tags: Option<String>,
}

impl CatalogListParams {
    /// Convert wire parameters into typed [`FilterOptions`].
    fn to_filters(&self) -> Result<FilterOptions, AppError> {
        let format = self
            .format
            .as_deref()
            .map(PromptFormat::from_str)
            .transpose()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let target_platform = self
            .target_platform
            .as_deref()
            .map(TargetPlatform::from_str)
            .transpose()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let sort_by = self
            .sort_by
            .as_deref()
            .map(SortBy::from_str)
            .transpose()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let tags = self.tags.as_deref().map(|raw| {
            raw.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect::<Vec<String>>()
        });

        Ok(FilterOptions {
            format,
            business_area: self.business_area.clone(),
            target_platform,
            min_rating: self.min_rating,
            sort_by,
            search: self.search.clone(),
            tags,
        })
    }
}

/// Parameters for the related-items endpoints (`?limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct RelatedParams {
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

/// GET /api/v1/prompts
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(params): Query<CatalogListParams>,
) -> AppResult<impl IntoResponse> {
    let filters = params.to_filters()?;
    let prompts = state.catalog.prompts(&filters);

    Ok(Json(DataResponse { data: prompts }))
}

/// GET /api/v1/prompts/{id}
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let prompt = state
        .catalog
        .prompt_by_id(&id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    Ok(Json(DataResponse { data: prompt }))
}

/// GET /api/v1/prompts/{id}/related
///
/// An unknown seed id yields an empty list, matching the pure query
/// contract rather than a 404.
pub async fn related_prompts(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RelatedParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    let related = state.catalog.related_prompts(&id, limit);

    Ok(Json(DataResponse { data: related }))
}

/// GET /api/v1/prompts/business-areas
pub async fn prompt_business_areas(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.prompt_business_areas(),
    }))
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// GET /api/v1/skills
pub async fn list_skills(
    State(state): State<AppState>,
    Query(params): Query<CatalogListParams>,
) -> AppResult<impl IntoResponse> {
    let filters = params.to_filters()?;
    let skills = state.catalog.skills(&filters);

    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/v1/skills/{id}
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let skill = state
        .catalog
        .skill_by_id(&id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;

    Ok(Json(DataResponse { data: skill }))
}

/// GET /api/v1/skills/{id}/related
pub async fn related_skills(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RelatedParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    let related = state.catalog.related_skills(&id, limit);

    Ok(Json(DataResponse { data: related }))
}

/// GET /api/v1/skills/business-areas
pub async fn skill_business_areas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.skill_business_areas(),
    }))
}

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

/// GET /api/v1/taxonomy
pub async fn get_taxonomy(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.taxonomy.as_ref().clone(),
    }))
}
