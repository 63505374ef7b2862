//! HTTP client for the Git-hosting REST API.
//!
//! [`GithubClient`] performs the five operations the submission pipeline
//! needs and the orchestration over them,
//! [`create_submission_pr`](GithubClient::create_submission_pr). Every
//! operation is a single attempt — no retries anywhere; a mid-sequence
//! failure aborts the whole submission and any already-created branch is
//! left behind for manual cleanup.

use std::time::Duration;

use base64::prelude::{Engine, BASE64_STANDARD};
use serde::Deserialize;
use serde_json::json;
use suiteprompt_core::item::Prompt;

use crate::error::GithubError;
use crate::pr;

/// Default hosting API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default base branch submissions target.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Labels applied to every submission pull request.
pub const SUBMISSION_LABELS: &[&str] = &["prompt-submission", "needs-review"];

/// Configuration for the hosting API client.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API base URL (override for self-hosted instances and tests).
    pub api_base: String,
    /// Personal access token used as a bearer credential.
    pub token: String,
    /// Content repository owner.
    pub owner: String,
    /// Content repository name.
    pub repo: String,
    /// Branch submissions are merged into.
    pub base_branch: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl GithubConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable              | Required | Default                  |
    /// |-----------------------|----------|--------------------------|
    /// | `GITHUB_TOKEN`        | yes      | —                        |
    /// | `GITHUB_API_BASE`     | no       | `https://api.github.com` |
    /// | `GITHUB_REPO_OWNER`   | no       | `suiteprompt`            |
    /// | `GITHUB_REPO_NAME`    | no       | `marketplace-content`    |
    /// | `GITHUB_BASE_BRANCH`  | no       | `main`                   |
    /// | `GITHUB_TIMEOUT_SECS` | no       | `30`                     |
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            token: std::env::var("GITHUB_TOKEN").expect("GITHUB_TOKEN must be set"),
            owner: std::env::var("GITHUB_REPO_OWNER").unwrap_or_else(|_| "suiteprompt".into()),
            repo: std::env::var("GITHUB_REPO_NAME")
                .unwrap_or_else(|_| "marketplace-content".into()),
            base_branch: std::env::var("GITHUB_BASE_BRANCH")
                .unwrap_or_else(|_| DEFAULT_BASE_BRANCH.to_string()),
            timeout_secs: std::env::var("GITHUB_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// The pull request handle returned to the submitter.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub html_url: String,
    pub number: u64,
}

#[derive(Debug, Deserialize)]
struct RefResponse {
    object: RefObject,
}

#[derive(Debug, Deserialize)]
struct RefObject {
    sha: String,
}

/// Client for the Git-hosting REST API.
pub struct GithubClient {
    client: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    /// Create a client with a pre-configured HTTP client.
    pub fn new(config: GithubConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("suiteprompt-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Branch name for a submission id.
    pub fn branch_name(submission_id: &str) -> String {
        format!("submissions/prompt-{submission_id}")
    }

    /// Repository path of the committed record for a submission id.
    pub fn submission_file_path(submission_id: &str) -> String {
        format!("data/submissions/{submission_id}.json")
    }

    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{tail}",
            self.config.api_base, self.config.owner, self.config.repo
        )
    }

    /// Execute a request, mapping transport failures and non-success
    /// statuses into [`GithubError`], and deserialize the response body.
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GithubError> {
        let response = request
            .bearer_auth(&self.config.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(GithubError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| status.to_string());
            return Err(GithubError::from_status(status.as_u16(), message));
        }

        response.json().await.map_err(GithubError::from_transport)
    }

    // -- individual operations ----------------------------------------------

    /// Resolve the head commit SHA of the base branch.
    pub async fn get_base_branch_head(&self) -> Result<String, GithubError> {
        let url = self.repo_url(&format!("git/ref/heads/{}", self.config.base_branch));
        let re: RefResponse = self.execute(self.client.get(&url)).await?;
        Ok(re.object.sha)
    }

    /// Create a new branch pointing at `sha`.
    pub async fn create_branch(&self, branch: &str, sha: &str) -> Result<(), GithubError> {
        let url = self.repo_url("git/refs");
        let body = json!({
            "ref": format!("refs/heads/{branch}"),
            "sha": sha,
        });
        let _: serde_json::Value = self.execute(self.client.post(&url).json(&body)).await?;
        Ok(())
    }

    /// Commit a single file to `branch` with the given commit message.
    /// File contents are base64-encoded per the hosting API contract.
    pub async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        branch: &str,
    ) -> Result<(), GithubError> {
        let url = self.repo_url(&format!("contents/{path}"));
        let body = json!({
            "message": message,
            "content": BASE64_STANDARD.encode(content),
            "branch": branch,
        });
        let _: serde_json::Value = self.execute(self.client.put(&url).json(&body)).await?;
        Ok(())
    }

    /// Open a pull request from `head` into the base branch.
    pub async fn create_pull_request(
        &self,
        title: &str,
        head: &str,
        body: &str,
    ) -> Result<PullRequest, GithubError> {
        let url = self.repo_url("pulls");
        let payload = json!({
            "title": title,
            "head": head,
            "base": self.config.base_branch,
            "body": body,
        });
        self.execute(self.client.post(&url).json(&payload)).await
    }

    /// Apply labels to an issue or pull request.
    pub async fn add_labels(&self, number: u64, labels: &[&str]) -> Result<(), GithubError> {
        let url = self.repo_url(&format!("issues/{number}/labels"));
        let body = json!({ "labels": labels });
        let _: serde_json::Value = self.execute(self.client.post(&url).json(&body)).await?;
        Ok(())
    }

    // -- orchestration -------------------------------------------------------

    /// Turn a canonical submission record into a reviewable pull request.
    ///
    /// Strictly ordered: resolve base head, create branch, commit the JSON
    /// record, open the PR, apply labels. Each step depends on the previous
    /// one's output, and any failure aborts the rest of the sequence.
    pub async fn create_submission_pr(
        &self,
        prompt: &Prompt,
        submitter_name: &str,
    ) -> Result<PullRequest, GithubError> {
        let base_sha = self.get_base_branch_head().await?;

        let branch = Self::branch_name(&prompt.id);
        self.create_branch(&branch, &base_sha).await?;
        tracing::debug!(branch, "Submission branch created");

        let file_path = Self::submission_file_path(&prompt.id);
        let file_content = serde_json::to_string_pretty(prompt)?;
        let commit_message = format!("Add prompt submission: {}", prompt.title);
        self.put_file(&file_path, &file_content, &commit_message, &branch)
            .await?;

        let pr_title = format!("New prompt submission: {}", prompt.title);
        let pr_body = pr::submission_description(prompt, submitter_name);
        let pull_request = self.create_pull_request(&pr_title, &branch, &pr_body).await?;

        self.add_labels(pull_request.number, SUBMISSION_LABELS).await?;

        tracing::info!(
            id = %prompt.id,
            pr = pull_request.number,
            url = %pull_request.html_url,
            "Submission pull request created"
        );

        Ok(pull_request)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
