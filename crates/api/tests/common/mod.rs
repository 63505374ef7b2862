//! Shared helpers for integration tests.
//!
//! Builds the full application router with the production middleware stack
//! (mirroring `router::build_app_router`) against the repository's seed
//! data files, and provides local stub servers standing in for the
//! Git-hosting and CAPTCHA endpoints. Stubs bind to `127.0.0.1:0`; the
//! client under test is pointed at them through its configurable base URLs.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use suiteprompt_api::captcha::{TurnstileConfig, TurnstileVerifier};
use suiteprompt_api::config::ServerConfig;
use suiteprompt_api::router::build_app_router;
use suiteprompt_api::state::AppState;
use suiteprompt_catalog::Catalog;
use suiteprompt_core::taxonomy::Taxonomy;
use suiteprompt_github::{GithubClient, GithubConfig};
use suiteprompt_notify::{EmailConfig, EmailDelivery};

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        marketplace_data_path: "../../data/marketplace.json".to_string(),
        taxonomy_path: "../../config/taxonomy.json".to_string(),
    }
}

/// Load the repository's seed catalog snapshot.
pub fn load_catalog() -> Catalog {
    Catalog::from_file("../../data/marketplace.json").expect("seed catalog must parse")
}

/// Load the repository's taxonomy configuration.
pub fn load_taxonomy() -> Taxonomy {
    Taxonomy::from_file("../../config/taxonomy.json").expect("seed taxonomy must parse")
}

/// Build the full application router with all middleware layers.
///
/// `github_base` and `turnstile_url` point the external clients at stub
/// servers (or at an unreachable port for catalog-only tests). The GitHub
/// client uses a 1-second timeout so timeout scenarios stay fast.
pub fn build_test_app(
    github_base: &str,
    turnstile_url: &str,
    mailer: Option<EmailDelivery>,
) -> Router {
    let config = test_config();

    let github = GithubClient::new(GithubConfig {
        api_base: github_base.to_string(),
        token: "test-token".to_string(),
        owner: "suiteprompt".to_string(),
        repo: "marketplace-content".to_string(),
        base_branch: "main".to_string(),
        timeout_secs: 1,
    });

    let captcha = TurnstileVerifier::new(TurnstileConfig {
        verify_url: turnstile_url.to_string(),
        secret: "test-secret".to_string(),
    });

    let state = AppState {
        catalog: Arc::new(load_catalog()),
        taxonomy: Arc::new(load_taxonomy()),
        config: Arc::new(config.clone()),
        github: Arc::new(github),
        captcha: Arc::new(captcha),
        mailer: mailer.map(Arc::new),
    };

    build_app_router(state, &config)
}

/// Build an app whose external collaborators are unreachable. Fine for
/// catalog and health tests that never leave the process.
pub fn build_catalog_app() -> Router {
    build_test_app("http://127.0.0.1:9", "http://127.0.0.1:9/siteverify", None)
}

/// An `EmailDelivery` pointing at a port nothing listens on, so every send
/// fails with a transport error.
pub fn failing_mailer() -> EmailDelivery {
    EmailDelivery::new(EmailConfig {
        smtp_host: "127.0.0.1".to_string(),
        smtp_port: 9,
        from_address: "noreply@suiteprompt.dev".to_string(),
        smtp_user: None,
        smtp_password: None,
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get_request(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Issue a JSON POST request against the app.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

// ---------------------------------------------------------------------------
// Stub servers
// ---------------------------------------------------------------------------

/// One request captured by a stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Value,
}

/// Shared request log for a stub server.
#[derive(Debug, Clone, Default)]
pub struct Recorded(pub Arc<Mutex<Vec<RecordedRequest>>>);

impl Recorded {
    fn push(&self, method: &str, path: String, body: Value) {
        self.0.lock().expect("request log lock").push(RecordedRequest {
            method: method.to_string(),
            path,
            body,
        });
    }

    /// Snapshot of the captured requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.0.lock().expect("request log lock").clone()
    }

    /// The first captured request matching `method` and a path fragment.
    pub fn find(&self, method: &str, path_fragment: &str) -> Option<RecordedRequest> {
        self.requests()
            .into_iter()
            .find(|r| r.method == method && r.path.contains(path_fragment))
    }
}

/// Behavior of the Git-hosting stub.
#[derive(Debug, Clone, Copy)]
pub enum GithubStubMode {
    /// All operations succeed; the PR comes back as number 42.
    Success,
    /// The base-ref lookup answers 403 with a rate-limit message.
    RateLimited,
    /// The base-ref lookup stalls past the client's 1-second timeout.
    SlowRef,
}

#[derive(Clone)]
struct GithubStubState {
    mode: GithubStubMode,
    recorded: Recorded,
}

/// Spawn a stub Git-hosting API server. Returns its base URL and the
/// request log.
pub async fn spawn_github_stub(mode: GithubStubMode) -> (String, Recorded) {
    let recorded = Recorded::default();
    let state = GithubStubState {
        mode,
        recorded: recorded.clone(),
    };

    let router = Router::new()
        .route(
            "/repos/{owner}/{repo}/git/ref/heads/{branch}",
            get(stub_get_ref),
        )
        .route("/repos/{owner}/{repo}/git/refs", post(stub_create_ref))
        .route(
            "/repos/{owner}/{repo}/contents/{*path}",
            put(stub_put_contents),
        )
        .route("/repos/{owner}/{repo}/pulls", post(stub_create_pull))
        .route(
            "/repos/{owner}/{repo}/issues/{number}/labels",
            post(stub_add_labels),
        )
        .with_state(state);

    (spawn(router).await, recorded)
}

async fn stub_get_ref(
    State(state): State<GithubStubState>,
    Path((_owner, _repo, branch)): Path<(String, String, String)>,
) -> Response {
    state
        .recorded
        .push("GET", format!("git/ref/heads/{branch}"), Value::Null);

    match state.mode {
        GithubStubMode::Success => {
            Json(json!({ "object": { "sha": "abc123def456" } })).into_response()
        }
        GithubStubMode::RateLimited => (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "API rate limit exceeded for installation ID 1." })),
        )
            .into_response(),
        GithubStubMode::SlowRef => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "object": { "sha": "abc123def456" } })).into_response()
        }
    }
}

async fn stub_create_ref(
    State(state): State<GithubStubState>,
    Json(body): Json<Value>,
) -> Response {
    state.recorded.push("POST", "git/refs".to_string(), body);
    (StatusCode::CREATED, Json(json!({ "ref": "created" }))).into_response()
}

async fn stub_put_contents(
    State(state): State<GithubStubState>,
    Path((_owner, _repo, path)): Path<(String, String, String)>,
    Json(body): Json<Value>,
) -> Response {
    state.recorded.push("PUT", format!("contents/{path}"), body);
    (StatusCode::CREATED, Json(json!({ "content": {} }))).into_response()
}

async fn stub_create_pull(
    State(state): State<GithubStubState>,
    Json(body): Json<Value>,
) -> Response {
    state.recorded.push("POST", "pulls".to_string(), body);
    Json(json!({
        "html_url": "https://github.test/suiteprompt/marketplace-content/pull/42",
        "number": 42,
    }))
    .into_response()
}

async fn stub_add_labels(
    State(state): State<GithubStubState>,
    Path((_owner, _repo, number)): Path<(String, String, u64)>,
    Json(body): Json<Value>,
) -> Response {
    state
        .recorded
        .push("POST", format!("issues/{number}/labels"), body);
    Json(json!([])).into_response()
}

/// Spawn a stub CAPTCHA verification server answering `{"success": ...}`.
/// Returns the verification URL and the request log.
pub async fn spawn_turnstile_stub(success: bool) -> (String, Recorded) {
    let recorded = Recorded::default();
    let state = (success, recorded.clone());

    let router = Router::new()
        .route(
            "/siteverify",
            post(
                |State((success, recorded)): State<(bool, Recorded)>, Json(body): Json<Value>| async move {
                    recorded.push("POST", "siteverify".to_string(), body);
                    Json(json!({ "success": success }))
                },
            ),
        )
        .with_state(state);

    let base = spawn(router).await;
    (format!("{base}/siteverify"), recorded)
}

/// Bind a router to an ephemeral port and serve it in the background.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub server binds");
    let addr = listener.local_addr().expect("stub server has an address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server runs");
    });
    format!("http://{addr}")
}
