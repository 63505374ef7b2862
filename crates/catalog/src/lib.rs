//! In-memory marketplace catalog.
//!
//! The catalog is an immutable snapshot of `{prompts, skills}` loaded once
//! at process start from a JSON file. There is no in-app create, update, or
//! delete path — accepted community submissions land in the content
//! repository out-of-band and only appear here after the snapshot is
//! regenerated. All queries are linear scans over the snapshot; see
//! [`query`] for the filter and ranking semantics.

pub mod query;

use std::path::Path;

use suiteprompt_core::item::{FilterOptions, MarketplaceData, Prompt, Skill};

/// Error type for catalog snapshot loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The snapshot file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid catalog JSON.
    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The loaded catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    data: MarketplaceData,
}

impl Catalog {
    /// Wrap an already-deserialized snapshot.
    pub fn from_data(data: MarketplaceData) -> Self {
        Self { data }
    }

    /// Load the snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let data: MarketplaceData =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(
            prompts = data.prompts.len(),
            skills = data.skills.len(),
            path = %path.display(),
            "Catalog snapshot loaded"
        );

        Ok(Self { data })
    }

    /// Number of prompts in the snapshot.
    pub fn prompt_count(&self) -> usize {
        self.data.prompts.len()
    }

    /// Number of skills in the snapshot.
    pub fn skill_count(&self) -> usize {
        self.data.skills.len()
    }

    /// Query prompts with the given filters.
    pub fn prompts(&self, filters: &FilterOptions) -> Vec<Prompt> {
        query::query_prompts(&self.data.prompts, filters)
    }

    /// Query skills with the given filters.
    pub fn skills(&self, filters: &FilterOptions) -> Vec<Skill> {
        query::query_skills(&self.data.skills, filters)
    }

    /// Look up a prompt by id.
    pub fn prompt_by_id(&self, id: &str) -> Option<&Prompt> {
        self.data.prompts.iter().find(|p| p.id == id)
    }

    /// Look up a skill by id.
    pub fn skill_by_id(&self, id: &str) -> Option<&Skill> {
        self.data.skills.iter().find(|s| s.id == id)
    }

    /// Related prompts for a seed prompt id. Empty when the id is unknown.
    pub fn related_prompts(&self, id: &str, limit: usize) -> Vec<Prompt> {
        match self.prompt_by_id(id) {
            Some(seed) => query::related_prompts(&self.data.prompts, seed, limit),
            None => Vec::new(),
        }
    }

    /// Related skills for a seed skill id. Empty when the id is unknown.
    pub fn related_skills(&self, id: &str, limit: usize) -> Vec<Skill> {
        match self.skill_by_id(id) {
            Some(seed) => query::related_skills(&self.data.skills, seed, limit),
            None => Vec::new(),
        }
    }

    /// Sorted, de-duplicated business areas present among prompts.
    pub fn prompt_business_areas(&self) -> Vec<String> {
        query::business_areas(self.data.prompts.iter().map(|p| p.business_area.as_str()))
    }

    /// Sorted, de-duplicated business areas present among skills.
    pub fn skill_business_areas(&self) -> Vec<String> {
        query::business_areas(self.data.skills.iter().map(|s| s.business_area.as_str()))
    }
}
