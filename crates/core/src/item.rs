//! Marketplace data model: prompts, skills, and their filter options.
//!
//! The wire and data-file format is camelCase JSON; every type here mirrors
//! the catalog snapshot layout. `Prompt` and `Skill` are separate structs —
//! the struct itself is the discriminator, so `Skill` carries no redundant
//! `format` field. A community submission always normalizes into a `Prompt`
//! record, even for skill submissions (see `submission`).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Delivery format of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptFormat {
    General,
    PromptStudio,
    Mcp,
    Skill,
}

/// All valid prompt format strings.
pub const VALID_FORMATS: &[&str] = &["general", "prompt-studio", "mcp", "skill"];

impl PromptFormat {
    /// Return the format as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::PromptStudio => "prompt-studio",
            Self::Mcp => "mcp",
            Self::Skill => "skill",
        }
    }

    /// Parse a format from its wire string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "general" => Ok(Self::General),
            "prompt-studio" => Ok(Self::PromptStudio),
            "mcp" => Ok(Self::Mcp),
            "skill" => Ok(Self::Skill),
            _ => Err(CoreError::Validation(format!(
                "Invalid format '{s}'. Must be one of: {}",
                VALID_FORMATS.join(", ")
            ))),
        }
    }
}

/// Platform surface a prompt is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetPlatform {
    TextEnhance,
    PromptStudio,
    Advisor,
    Mcp,
    Claude,
    Chatgpt,
}

/// All valid target platform strings.
pub const VALID_TARGET_PLATFORMS: &[&str] = &[
    "text-enhance",
    "prompt-studio",
    "advisor",
    "mcp",
    "claude",
    "chatgpt",
];

/// Target platforms accepted by the submission form (a subset of
/// [`VALID_TARGET_PLATFORMS`]).
pub const SUBMISSION_TARGET_PLATFORMS: &[&str] =
    &["text-enhance", "prompt-studio", "advisor", "mcp"];

impl TargetPlatform {
    /// Return the platform as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextEnhance => "text-enhance",
            Self::PromptStudio => "prompt-studio",
            Self::Advisor => "advisor",
            Self::Mcp => "mcp",
            Self::Claude => "claude",
            Self::Chatgpt => "chatgpt",
        }
    }

    /// Parse a platform from its wire string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "text-enhance" => Ok(Self::TextEnhance),
            "prompt-studio" => Ok(Self::PromptStudio),
            "advisor" => Ok(Self::Advisor),
            "mcp" => Ok(Self::Mcp),
            "claude" => Ok(Self::Claude),
            "chatgpt" => Ok(Self::Chatgpt),
            _ => Err(CoreError::Validation(format!(
                "Invalid target platform '{s}'. Must be one of: {}",
                VALID_TARGET_PLATFORMS.join(", ")
            ))),
        }
    }
}

/// Sort policy for catalog queries.
///
/// `Popularity` and `Downloads` produce identical orderings; both sort by
/// descending download count. The duplication is part of the public query
/// contract and is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Popularity,
    Rating,
    Newest,
    Downloads,
}

impl SortBy {
    /// Parse a sort policy from its wire string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "popularity" => Ok(Self::Popularity),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            "downloads" => Ok(Self::Downloads),
            _ => Err(CoreError::Validation(format!(
                "Invalid sort policy '{s}'. Must be one of: popularity, rating, newest, downloads"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared record parts
// ---------------------------------------------------------------------------

/// Item author attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Aggregate rating. `average` lies in [0, 5] and is informational only;
/// there is no in-app ratings-submission mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub average: f64,
    pub count: u32,
}

/// LLM configuration attached to prompt-studio prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
}

/// Package-style metadata attached to imported skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// A prompt record in the catalog. Also the canonical shape of every
/// committed community submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub description: String,
    /// The raw prompt text.
    pub content: String,
    pub format: PromptFormat,
    /// Taxonomy category id, e.g. `"accounting"`.
    pub business_area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_platform: Option<TargetPlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_tools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_variables: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_settings: Option<ModelSettings>,
    pub author: Author,
    pub rating: Rating,
    pub downloads: u64,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A skill record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Full skill markdown content.
    pub content: String,
    /// Taxonomy category id.
    pub business_area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SkillMetadata>,
    pub author: Author,
    pub rating: Rating,
    pub downloads: u64,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The full catalog snapshot: `{ "prompts": [...], "skills": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketplaceData {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Catalog query filters. All fields optional; present filters are
/// AND-combined, except `tags`, which matches on ANY shared tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub format: Option<PromptFormat>,
    pub business_area: Option<String>,
    pub target_platform: Option<TargetPlatform>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<SortBy>,
    pub search: Option<String>,
    pub tags: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
