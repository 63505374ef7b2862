//! Learning-path progress records.
//!
//! The learning center tracks, per path, which tutorial modules a user has
//! completed. The model is deliberately small: a list of per-module records
//! with two mutating operations (mark a module complete, reset the whole
//! path). Storage is the caller's concern — the shipped product keeps these
//! records client-side.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Progress state for one module within a learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    pub path_id: String,
    pub module_id: String,
    pub completed: bool,
    /// Percent complete, 0-100.
    pub progress: u8,
    pub last_accessed: Timestamp,
}

/// Progress for a whole learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathProgress {
    pub path_id: String,
    pub modules: Vec<ModuleProgress>,
}

impl PathProgress {
    /// Initialize fresh progress for a path: every module incomplete at 0%.
    pub fn new(path_id: &str, module_ids: &[String], now: Timestamp) -> Self {
        Self {
            path_id: path_id.to_string(),
            modules: module_ids
                .iter()
                .map(|module_id| ModuleProgress {
                    path_id: path_id.to_string(),
                    module_id: module_id.clone(),
                    completed: false,
                    progress: 0,
                    last_accessed: now,
                })
                .collect(),
        }
    }

    /// Mark a module's completion state and progress percent.
    ///
    /// Unknown module ids are ignored; the record list is fixed at
    /// initialization.
    pub fn set_completed(&mut self, module_id: &str, completed: bool, progress: u8, now: Timestamp) {
        if let Some(module) = self.modules.iter_mut().find(|m| m.module_id == module_id) {
            module.completed = completed;
            module.progress = progress.min(100);
            module.last_accessed = now;
        }
    }

    /// Reset every module to incomplete at 0%.
    pub fn reset(&mut self, now: Timestamp) {
        for module in &mut self.modules {
            module.completed = false;
            module.progress = 0;
            module.last_accessed = now;
        }
    }

    /// Overall path completion as a rounded percentage of completed modules.
    pub fn overall_percent(&self) -> u8 {
        if self.modules.is_empty() {
            return 0;
        }
        let completed = self.modules.iter().filter(|m| m.completed).count();
        ((completed as f64 / self.modules.len() as f64) * 100.0).round() as u8
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
