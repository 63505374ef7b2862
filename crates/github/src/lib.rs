//! Git-hosting REST client for the submission pipeline.
//!
//! A community submission becomes a reviewable artifact by committing the
//! canonical JSON record to a content repository on a fresh branch and
//! opening a pull request. This crate wraps the hosting API operations the
//! pipeline needs (get-ref, create-ref, put-file, create-pull-request,
//! add-labels) and the strictly-ordered orchestration over them.

pub mod client;
pub mod error;
pub mod pr;

pub use client::{GithubClient, GithubConfig, PullRequest};
pub use error::GithubError;
