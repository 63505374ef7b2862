//! Integration tests for the catalog browsing endpoints, driven against the
//! repository's seed snapshot.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_catalog_app, get_request};

fn ids(data: &serde_json::Value) -> Vec<String> {
    data.as_array()
        .expect("data is an array")
        .iter()
        .map(|item| item["id"].as_str().expect("item has id").to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_prompts_without_filters_preserves_snapshot_order() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        ids(&json["data"]),
        vec![
            "overdue-invoice-finder",
            "pipeline-health-review",
            "item-reorder-advisor",
            "transaction-search-mcp",
        ]
    );
}

#[tokio::test]
async fn format_filter_narrows_to_exact_matches() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts?format=mcp").await;
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec!["transaction-search-mcp"]);
}

#[tokio::test]
async fn business_area_filter_narrows_to_exact_matches() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts?businessArea=accounting").await;
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec!["overdue-invoice-finder"]);
}

#[tokio::test]
async fn search_matches_title_description_and_tags_case_insensitively() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts?search=INVOICE").await;
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec!["overdue-invoice-finder"]);
}

#[tokio::test]
async fn min_rating_is_inclusive() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts?minRating=4.7").await;
    let json = body_json(response).await;
    assert_eq!(
        ids(&json["data"]),
        vec!["overdue-invoice-finder", "transaction-search-mcp"]
    );
}

#[tokio::test]
async fn tags_filter_matches_any_shared_tag() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts?tags=planning,pipeline").await;
    let json = body_json(response).await;
    assert_eq!(
        ids(&json["data"]),
        vec!["pipeline-health-review", "item-reorder-advisor"]
    );
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn downloads_sort_is_descending() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts?sortBy=downloads").await;
    let json = body_json(response).await;
    assert_eq!(
        ids(&json["data"]),
        vec![
            "transaction-search-mcp",
            "overdue-invoice-finder",
            "pipeline-health-review",
            "item-reorder-advisor",
        ]
    );
}

#[tokio::test]
async fn popularity_sort_equals_downloads_sort() {
    let by_popularity = body_json(
        get_request(build_catalog_app(), "/api/v1/prompts?sortBy=popularity").await,
    )
    .await;
    let by_downloads = body_json(
        get_request(build_catalog_app(), "/api/v1/prompts?sortBy=downloads").await,
    )
    .await;
    assert_eq!(ids(&by_popularity["data"]), ids(&by_downloads["data"]));
}

#[tokio::test]
async fn newest_sort_puts_latest_first() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts?sortBy=newest").await;
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"])[0], "transaction-search-mcp");
}

#[tokio::test]
async fn invalid_sort_policy_is_a_bad_request() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts?sortBy=oldest").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Detail and related
// ---------------------------------------------------------------------------

#[tokio::test]
async fn prompt_detail_returns_the_record() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts/overdue-invoice-finder").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Overdue Invoice Finder");
    assert_eq!(json["data"]["businessArea"], "accounting");
    assert_eq!(json["data"]["inputVariables"][0], "CUSTOMER");
}

#[tokio::test]
async fn unknown_prompt_detail_is_404() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn related_prompts_rank_by_shared_tags_then_downloads() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts/overdue-invoice-finder/related").await;
    let json = body_json(response).await;
    // Neither candidate shares a tag with the seed; both qualify via shared
    // format or author and rank by downloads.
    assert_eq!(
        ids(&json["data"]),
        vec!["pipeline-health-review", "item-reorder-advisor"]
    );
}

#[tokio::test]
async fn related_respects_limit_parameter() {
    let app = build_catalog_app();
    let response =
        get_request(app, "/api/v1/prompts/overdue-invoice-finder/related?limit=1").await;
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec!["pipeline-health-review"]);
}

#[tokio::test]
async fn related_for_unknown_seed_is_an_empty_list() {
    let app = build_catalog_app();
    let response = get_request(app, "/api/v1/prompts/nope/related").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"].as_array().expect("array").is_empty());
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_skills_and_detail() {
    let response = get_request(build_catalog_app(), "/api/v1/skills").await;
    let json = body_json(response).await;
    assert_eq!(
        ids(&json["data"]),
        vec!["approval-workflow-skill", "saved-search-builder"]
    );

    let response =
        get_request(build_catalog_app(), "/api/v1/skills/approval-workflow-skill").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["metadata"]["version"], "1.2.0");
}

#[tokio::test]
async fn skill_business_areas_are_sorted_and_unique() {
    let response = get_request(build_catalog_app(), "/api/v1/skills/business-areas").await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!(["approval-automation", "saved-search-analytics"])
    );
}

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn taxonomy_endpoint_returns_category_sets() {
    let response = get_request(build_catalog_app(), "/api/v1/taxonomy").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let categories = &json["data"]["submissionCategories"];
    assert!(categories["prompts"]["accounting"].is_object());
    assert!(categories["skills"]["workflow-automation"].is_object());
    assert_eq!(
        json["data"]["skillCapabilities"]["automation"]["displayName"],
        "Automation"
    );
}
