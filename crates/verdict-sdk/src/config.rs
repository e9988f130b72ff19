//! Engine configuration

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Configuration for [`DecisionEngine`](crate::DecisionEngine)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Include the annotated graph in every response
    #[serde(default = "default_true")]
    pub annotate: bool,

    /// Persist each evaluation's annotated trace back to the store, so
    /// the builder UI can replay the last run per rule version
    #[serde(default)]
    pub persist_trace: bool,

    /// Override the traversal step limit (defaults to the node count)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            annotate: true,
            persist_trace: false,
            max_steps: None,
        }
    }
}
