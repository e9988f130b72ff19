//! Stored rule models
//!
//! Field names mirror the authoring client's JSON (`inputAttributes`,
//! `outputAttributes`, `condition`). Versions are decimal steps of 0.1,
//! the numbering already present in stored rules.

use serde::{Deserialize, Serialize};
use verdict_core::RuleGraph;

/// The writable part of a rule, as submitted by the authoring client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "inputAttributes", default)]
    pub input_attributes: Vec<String>,
    #[serde(rename = "outputAttributes", default)]
    pub output_attributes: Vec<String>,
    #[serde(default)]
    pub condition: RuleGraph,
}

/// One stored version of a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "inputAttributes", default)]
    pub input_attributes: Vec<String>,
    #[serde(rename = "outputAttributes", default)]
    pub output_attributes: Vec<String>,
    pub condition: RuleGraph,
    pub version: f64,
}

impl StoredRule {
    pub(crate) fn from_draft(id: String, version: f64, draft: RuleDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            input_attributes: draft.input_attributes,
            output_attributes: draft.output_attributes,
            condition: draft.condition,
            version,
        }
    }

    pub(crate) fn apply_draft(&mut self, draft: RuleDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.input_attributes = draft.input_attributes;
        self.output_attributes = draft.output_attributes;
        self.condition = draft.condition;
    }
}

/// The next published version: one 0.1 step up, rounded to one decimal.
pub fn next_version(version: f64) -> f64 {
    ((version + 0.1) * 10.0).round() / 10.0
}

/// Canonical one-decimal key for a version number; version lookups
/// compare through this to sidestep float noise.
pub fn version_key(version: f64) -> String {
    format!("{version:.1}")
}
