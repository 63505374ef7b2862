//! Pull request description for community submissions.

use chrono::{SecondsFormat, Utc};
use suiteprompt_core::item::Prompt;

use crate::client::GithubClient;

/// Maximum number of content characters shown in the PR preview block.
pub const PREVIEW_CHARS: usize = 500;

/// Build the pull request body for a submission.
///
/// Contains the submission metadata, a truncated content preview, the
/// reviewer checklist, the committed file path, and a note that the
/// submitter was notified by email.
pub fn submission_description(prompt: &Prompt, submitter_name: &str) -> String {
    let preview: String = prompt.content.chars().take(PREVIEW_CHARS).collect();
    let ellipsis = if prompt.content.chars().count() > PREVIEW_CHARS {
        "..."
    } else {
        ""
    };
    let submitted_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let file_path = GithubClient::submission_file_path(&prompt.id);

    format!(
        "## New Prompt Submission\n\
         \n\
         **Title:** {title}\n\
         \n\
         **Description:** {description}\n\
         \n\
         **Format:** {format}\n\
         \n\
         **Category:** {category}\n\
         \n\
         **Submitted by:** {submitter_name}\n\
         \n\
         ---\n\
         \n\
         ### Prompt Content Preview\n\
         \n\
         ```\n\
         {preview}{ellipsis}\n\
         ```\n\
         \n\
         ---\n\
         \n\
         ### Review Checklist\n\
         \n\
         - [ ] Content is appropriate and follows guidelines\n\
         - [ ] No sensitive information included\n\
         - [ ] Variables are properly formatted\n\
         - [ ] Category and tags are accurate (matches prompt content)\n\
         - [ ] Author attribution is correct\n\
         \n\
         ---\n\
         \n\
         **Submitted at:** {submitted_at}\n\
         \n\
         **File:** `{file_path}`\n\
         \n\
         _Note: Submitter was notified via email with a link to track this PR._",
        title = prompt.title,
        description = prompt.description,
        format = prompt.format.as_str(),
        category = prompt.business_area,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
