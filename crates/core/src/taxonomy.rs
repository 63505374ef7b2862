//! Submission-category taxonomy.
//!
//! The taxonomy is a read-only configuration loaded once at process start
//! from `config/taxonomy.json`. It declares which category ids a community
//! submission may use: prompt categories (grouped under a parent category
//! such as `finance`) and skill categories (grouped under a parent
//! capability such as `development`). The two sets are disjoint by
//! convention, and cross-field validation depends on which set a submitted
//! `businessArea` belongs to.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A category a prompt submission can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptCategory {
    pub id: String,
    pub display_name: String,
    /// Grouping key shown as an option group in the submission form,
    /// e.g. `finance` or `workforce-global`.
    pub parent_category: String,
}

/// A category a skill submission can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub display_name: String,
    /// Grouping key referencing an entry in `skillCapabilities`.
    pub parent_capability: String,
}

/// Display information for a skill capability group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCapability {
    pub id: String,
    pub display_name: String,
    pub description: String,
}

/// The category sets valid for new submissions, keyed by category id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCategories {
    #[serde(default)]
    pub prompts: BTreeMap<String, PromptCategory>,
    #[serde(default)]
    pub skills: BTreeMap<String, SkillCategory>,
}

/// The full taxonomy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    pub submission_categories: SubmissionCategories,
    #[serde(default)]
    pub skill_capabilities: BTreeMap<String, SkillCapability>,
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

impl Taxonomy {
    /// Load the taxonomy from a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Failed to read taxonomy file {}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            CoreError::Internal(format!(
                "Failed to parse taxonomy file {}: {e}",
                path.display()
            ))
        })
    }

    /// Whether `id` is a valid prompt submission category.
    pub fn is_prompt_category(&self, id: &str) -> bool {
        self.submission_categories.prompts.contains_key(id)
    }

    /// Whether `id` is a valid skill submission category.
    pub fn is_skill_category(&self, id: &str) -> bool {
        self.submission_categories.skills.contains_key(id)
    }

    /// Whether `id` is valid in either category set.
    pub fn is_known_category(&self, id: &str) -> bool {
        self.is_prompt_category(id) || self.is_skill_category(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
