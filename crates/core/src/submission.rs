//! Community submission requests: validation and normalization.
//!
//! A submission arrives as a camelCase JSON form payload. Every field is
//! defaulted during deserialization so that validation can report ALL
//! violations in one pass — the API returns the aggregated list, never just
//! the first failure. After validation the payload is normalized into a
//! canonical [`Prompt`] record; the submitter's email is intentionally not
//! part of that record and must be handled separately by the caller.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::item::{
    Author, ModelSettings, Prompt, PromptFormat, Rating, TargetPlatform,
    SUBMISSION_TARGET_PLATFORMS, VALID_FORMATS,
};
use crate::sanitize::sanitize_input;
use crate::taxonomy::Taxonomy;
use crate::variables::extract_variables;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum prompt content length (general and MCP formats).
pub const MAX_CONTENT_LEN: usize = 5_000;

/// Maximum system prompt length (prompt-studio format).
pub const MAX_SYSTEM_PROMPT_LEN: usize = 5_000;

/// Maximum skill content length (skill format).
pub const MAX_SKILL_CONTENT_LEN: usize = 10_000;

/// Maximum number of tags on a new submission.
pub const MAX_SUBMISSION_TAGS: usize = 5;

/// Minimum model max-tokens value.
pub const MIN_MAX_TOKENS: u32 = 1;

/// Maximum model max-tokens value.
pub const MAX_MAX_TOKENS: u32 = 4_096;

/// Length of the random base-36 suffix in a submission id.
const ID_SUFFIX_LEN: usize = 5;

/// Alphabet for the submission id suffix.
const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// ---------------------------------------------------------------------------
// Request payload
// ---------------------------------------------------------------------------

/// Raw submission form payload.
///
/// `format` and `targetPlatform` stay strings here so that an invalid value
/// surfaces as a field error alongside every other violation instead of
/// aborting deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitPromptRequest {
    pub title: String,
    pub format: String,
    pub description: String,

    // General & MCP content
    pub content: Option<String>,
    pub input_variables: Option<Vec<String>>,

    // Prompt-studio content and model settings
    pub system_prompt: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,

    // Skill content
    pub skill_content: Option<String>,

    // Classification
    pub business_area: String,
    pub target_platform: Option<Vec<String>>,
    pub mcp_tools: Option<Vec<String>>,

    // Metadata
    pub tags: Option<Vec<String>>,

    // Submitter. The email never reaches the committed record.
    pub submitter_name: String,
    pub submitter_email: String,
    pub agree_to_terms: bool,

    // CAPTCHA token, verified out-of-band against the challenge service.
    pub turnstile_token: String,
}

impl SubmitPromptRequest {
    /// Parsed form of the `format` field, if valid.
    pub fn parsed_format(&self) -> Option<PromptFormat> {
        PromptFormat::from_str(&self.format).ok()
    }

    /// Return a copy with the free-text identity fields sanitized.
    ///
    /// Title, description, and submitter name are stripped and trimmed;
    /// content fields are persisted as-is.
    pub fn sanitized(&self) -> Self {
        Self {
            title: sanitize_input(&self.title),
            description: sanitize_input(&self.description),
            submitter_name: sanitize_input(&self.submitter_name),
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The offending field, in its wire (camelCase) spelling.
    pub path: String,
    pub message: String,
}

impl FieldError {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a submission payload against the schema and taxonomy.
///
/// Returns ALL violations, not just the first. The cross-field rule (a
/// skill submission must use a skill category, every other format a prompt
/// category) is only evaluated once the category is known to exist at all,
/// so an unknown category produces exactly one `businessArea` error.
pub fn validate_submission(
    submission: &SubmitPromptRequest,
    taxonomy: &Taxonomy,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // -- title ---------------------------------------------------------------
    if sanitize_input(&submission.title).is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if submission.title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new(
            "title",
            format!("Title must be less than {MAX_TITLE_LEN} characters"),
        ));
    }

    // -- format --------------------------------------------------------------
    let format = submission.parsed_format();
    if format.is_none() {
        errors.push(FieldError::new(
            "format",
            format!("Format must be one of: {}", VALID_FORMATS.join(", ")),
        ));
    }

    // -- description ---------------------------------------------------------
    if sanitize_input(&submission.description).is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    } else if submission.description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.push(FieldError::new(
            "description",
            format!("Description must be less than {MAX_DESCRIPTION_LEN} characters"),
        ));
    }

    // -- content fields ------------------------------------------------------
    if let Some(content) = &submission.content {
        if content.chars().count() > MAX_CONTENT_LEN {
            errors.push(FieldError::new(
                "content",
                format!("Content must be less than {MAX_CONTENT_LEN} characters"),
            ));
        }
    }

    if let Some(system_prompt) = &submission.system_prompt {
        if system_prompt.chars().count() > MAX_SYSTEM_PROMPT_LEN {
            errors.push(FieldError::new(
                "systemPrompt",
                format!("System prompt must be less than {MAX_SYSTEM_PROMPT_LEN} characters"),
            ));
        }
    }

    if let Some(temperature) = submission.temperature {
        if !(0.0..=1.0).contains(&temperature) {
            errors.push(FieldError::new(
                "temperature",
                "Temperature must be between 0 and 1",
            ));
        }
    }

    if let Some(max_tokens) = submission.max_tokens {
        if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&max_tokens) {
            errors.push(FieldError::new(
                "maxTokens",
                format!("Max tokens must be between {MIN_MAX_TOKENS} and {MAX_MAX_TOKENS}"),
            ));
        }
    }

    if let Some(skill_content) = &submission.skill_content {
        if skill_content.chars().count() > MAX_SKILL_CONTENT_LEN {
            errors.push(FieldError::new(
                "skillContent",
                format!("Skill content must be less than {MAX_SKILL_CONTENT_LEN} characters"),
            ));
        }
    }

    // -- businessArea (base membership) --------------------------------------
    let category_known = taxonomy.is_known_category(&submission.business_area);
    if submission.business_area.is_empty() {
        errors.push(FieldError::new("businessArea", "Category is required"));
    } else if !category_known {
        errors.push(FieldError::new(
            "businessArea",
            "Invalid category. Must be a valid category from the submission form.",
        ));
    }

    // -- targetPlatform ------------------------------------------------------
    if let Some(platforms) = &submission.target_platform {
        for platform in platforms {
            if !SUBMISSION_TARGET_PLATFORMS.contains(&platform.as_str()) {
                errors.push(FieldError::new(
                    "targetPlatform",
                    format!(
                        "Invalid target platform '{platform}'. Must be one of: {}",
                        SUBMISSION_TARGET_PLATFORMS.join(", ")
                    ),
                ));
            }
        }
    }

    // -- mcpTools ------------------------------------------------------------
    // Enforced here as well as in the submission form: an MCP prompt
    // without tool names is unusable.
    if format == Some(PromptFormat::Mcp)
        && submission.mcp_tools.as_ref().map_or(true, |t| t.is_empty())
    {
        errors.push(FieldError::new(
            "mcpTools",
            "At least one MCP tool is required for MCP prompts",
        ));
    }

    // -- tags ----------------------------------------------------------------
    if let Some(tags) = &submission.tags {
        if tags.len() > MAX_SUBMISSION_TAGS {
            errors.push(FieldError::new(
                "tags",
                format!("Maximum {MAX_SUBMISSION_TAGS} tags allowed"),
            ));
        }
    }

    // -- submitter -----------------------------------------------------------
    if sanitize_input(&submission.submitter_name).is_empty() {
        errors.push(FieldError::new("submitterName", "Name is required"));
    }

    if submission.submitter_email.is_empty() {
        errors.push(FieldError::new("submitterEmail", "Email is required"));
    } else if !submission.submitter_email.validate_email() {
        errors.push(FieldError::new("submitterEmail", "Valid email required"));
    }

    if !submission.agree_to_terms {
        errors.push(FieldError::new(
            "agreeToTerms",
            "You must agree to the terms",
        ));
    }

    if submission.turnstile_token.is_empty() {
        errors.push(FieldError::new(
            "turnstileToken",
            "CAPTCHA verification required",
        ));
    }

    // -- cross-field: businessArea must match the format's category set ------
    if let Some(format) = format {
        if category_known {
            if format == PromptFormat::Skill {
                if !taxonomy.is_skill_category(&submission.business_area) {
                    errors.push(FieldError::new(
                        "businessArea",
                        "For skills, you must select a valid skill category",
                    ));
                }
            } else if !taxonomy.is_prompt_category(&submission.business_area) {
                errors.push(FieldError::new(
                    "businessArea",
                    "For this format, you must select a valid prompt category",
                ));
            }
        }
    }

    errors
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Generate a submission id: `submitted-{unix_millis}-{5 base-36 chars}`.
///
/// Uniqueness is probabilistic; no check is made against existing
/// repository content. Collisions are treated as acceptably rare.
pub fn generate_submission_id() -> String {
    let timestamp = Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_CHARSET[rng.random_range(0..ID_CHARSET.len())] as char)
        .collect();
    format!("submitted-{timestamp}-{suffix}")
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a validated submission into the canonical [`Prompt`] record.
///
/// Format-specific body selection: general and MCP submissions use
/// `content`, prompt-studio uses `systemPrompt` (packing temperature and
/// max-tokens into `modelSettings`), skill uses `skillContent`. Input
/// variables fall back to extraction from the `content` field when not
/// supplied — the `content` field specifically, so a prompt-studio
/// submission without explicit variables gets an empty list.
pub fn format_submission_as_prompt(
    submission: &SubmitPromptRequest,
    prompt_id: &str,
) -> Result<Prompt, CoreError> {
    let format = PromptFormat::from_str(&submission.format)?;
    let now = Utc::now();

    let (content, model_settings) = match format {
        PromptFormat::General | PromptFormat::Mcp => {
            (submission.content.clone().unwrap_or_default(), None)
        }
        PromptFormat::PromptStudio => (
            submission.system_prompt.clone().unwrap_or_default(),
            Some(ModelSettings {
                temperature: submission.temperature,
                max_tokens: submission.max_tokens,
                ..ModelSettings::default()
            }),
        ),
        PromptFormat::Skill => (submission.skill_content.clone().unwrap_or_default(), None),
    };

    let input_variables = match &submission.input_variables {
        Some(vars) if !vars.is_empty() => vars.clone(),
        _ => submission
            .content
            .as_deref()
            .map(extract_variables)
            .unwrap_or_default(),
    };

    let target_platform = submission
        .target_platform
        .as_ref()
        .and_then(|platforms| platforms.first())
        .map(|p| TargetPlatform::from_str(p))
        .transpose()?;

    Ok(Prompt {
        id: prompt_id.to_string(),
        title: submission.title.clone(),
        description: submission.description.clone(),
        content,
        format,
        business_area: submission.business_area.clone(),
        target_platform,
        mcp_tools: submission.mcp_tools.clone(),
        input_variables: Some(input_variables),
        compatibility: Some(Vec::new()),
        model_settings,
        author: Author {
            id: format!("submitted-{}", now.timestamp_millis()),
            name: submission.submitter_name.clone(),
            avatar: Some(String::new()),
        },
        rating: Rating {
            average: 0.0,
            count: 0,
        },
        downloads: 0,
        tags: submission.tags.clone().unwrap_or_default(),
        created_at: now,
        updated_at: now,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
