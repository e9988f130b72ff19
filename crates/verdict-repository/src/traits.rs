//! Core trait definition for the rule store
//!
//! Any storage backend the engine consumes implements [`RuleStore`]:
//! versioned load/save of rules plus persistence of the last annotated
//! evaluation trace per version, so the visualizer can replay it.
//!
//! All operations are async and all implementations must be
//! `Send + Sync` for use across tasks.

use crate::error::StoreResult;
use crate::models::{RuleDraft, StoredRule};
use async_trait::async_trait;
use verdict_core::RuleGraph;

#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Create a rule at version 1.0 and return it with its assigned id.
    async fn create_rule(&self, draft: RuleDraft) -> StoreResult<StoredRule>;

    /// Load the latest version of a rule.
    async fn load_rule(&self, id: &str) -> StoreResult<StoredRule>;

    /// Load a specific version of a rule.
    async fn load_rule_version(&self, id: &str, version: f64) -> StoreResult<StoredRule>;

    /// All versions of a rule, ascending.
    async fn list_versions(&self, id: &str) -> StoreResult<Vec<f64>>;

    /// Overwrite the latest version's content in place, keeping its
    /// version number.
    async fn update_rule(&self, id: &str, draft: RuleDraft) -> StoreResult<StoredRule>;

    /// Publish the draft as a new version, one 0.1 step above the
    /// current one.
    async fn publish_version(&self, id: &str, draft: RuleDraft) -> StoreResult<StoredRule>;

    /// Delete one version. Deleting the current version promotes the
    /// latest remaining one, which is returned; deleting the last
    /// version removes the rule entirely and returns `None`.
    async fn delete_version(&self, id: &str, version: f64) -> StoreResult<Option<StoredRule>>;

    /// Persist the annotated trace of the last evaluation of a version.
    async fn save_annotated(&self, id: &str, version: f64, annotated: RuleGraph)
        -> StoreResult<()>;

    /// Fetch the stored annotated trace for a version, if any.
    async fn load_annotated(&self, id: &str, version: f64) -> StoreResult<Option<RuleGraph>>;
}
