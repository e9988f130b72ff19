//! In-memory rule store
//!
//! The default backend for the SDK and for tests. Keeps every version of
//! every rule plus the last annotated trace per version behind one
//! `RwLock`; ids are assigned from a process-local counter.

use crate::error::{StoreError, StoreResult};
use crate::models::{next_version, version_key, RuleDraft, StoredRule};
use crate::traits::RuleStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use verdict_core::RuleGraph;

#[derive(Debug, Default)]
struct Entry {
    /// All versions, ascending
    versions: Vec<StoredRule>,
    /// Last annotated evaluation per version key
    annotated: HashMap<String, RuleGraph>,
}

/// In-memory, versioned rule store
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    rules: RwLock<HashMap<String, Entry>>,
    next_id: AtomicU64,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("rule-{n}")
    }
}

#[async_trait]
impl RuleStore for MemoryRuleStore {
    async fn create_rule(&self, draft: RuleDraft) -> StoreResult<StoredRule> {
        let id = self.assign_id();
        let rule = StoredRule::from_draft(id.clone(), 1.0, draft);
        let mut rules = self.rules.write().await;
        rules.entry(id.clone()).or_default().versions.push(rule.clone());
        tracing::debug!(rule = %id, "created rule at version 1.0");
        Ok(rule)
    }

    async fn load_rule(&self, id: &str) -> StoreResult<StoredRule> {
        let rules = self.rules.read().await;
        rules
            .get(id)
            .and_then(|e| e.versions.last())
            .cloned()
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })
    }

    async fn load_rule_version(&self, id: &str, version: f64) -> StoreResult<StoredRule> {
        let rules = self.rules.read().await;
        let entry = rules
            .get(id)
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        let key = version_key(version);
        entry
            .versions
            .iter()
            .find(|r| version_key(r.version) == key)
            .cloned()
            .ok_or(StoreError::VersionNotFound {
                id: id.to_string(),
                version: key,
            })
    }

    async fn list_versions(&self, id: &str) -> StoreResult<Vec<f64>> {
        let rules = self.rules.read().await;
        let entry = rules
            .get(id)
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        Ok(entry.versions.iter().map(|r| r.version).collect())
    }

    async fn update_rule(&self, id: &str, draft: RuleDraft) -> StoreResult<StoredRule> {
        let mut rules = self.rules.write().await;
        let entry = rules
            .get_mut(id)
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        let current = entry
            .versions
            .last_mut()
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        current.apply_draft(draft);
        Ok(current.clone())
    }

    async fn publish_version(&self, id: &str, draft: RuleDraft) -> StoreResult<StoredRule> {
        let mut rules = self.rules.write().await;
        let entry = rules
            .get_mut(id)
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        let current = entry
            .versions
            .last()
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        let version = next_version(current.version);
        let rule = StoredRule::from_draft(id.to_string(), version, draft);
        entry.versions.push(rule.clone());
        tracing::debug!(rule = %id, version = %version_key(version), "published version");
        Ok(rule)
    }

    async fn delete_version(&self, id: &str, version: f64) -> StoreResult<Option<StoredRule>> {
        let mut rules = self.rules.write().await;
        let entry = rules
            .get_mut(id)
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        let key = version_key(version);
        let index = entry
            .versions
            .iter()
            .position(|r| version_key(r.version) == key)
            .ok_or_else(|| StoreError::VersionNotFound {
                id: id.to_string(),
                version: key.clone(),
            })?;
        entry.versions.remove(index);
        entry.annotated.remove(&key);

        // The latest remaining version becomes current; none left means
        // the rule itself goes away
        let remaining = entry.versions.last().cloned();
        if remaining.is_none() {
            rules.remove(id);
            tracing::debug!(rule = %id, "deleted last version; rule removed");
        }
        Ok(remaining)
    }

    async fn save_annotated(
        &self,
        id: &str,
        version: f64,
        annotated: RuleGraph,
    ) -> StoreResult<()> {
        let mut rules = self.rules.write().await;
        let entry = rules
            .get_mut(id)
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        entry.annotated.insert(version_key(version), annotated);
        Ok(())
    }

    async fn load_annotated(&self, id: &str, version: f64) -> StoreResult<Option<RuleGraph>> {
        let rules = self.rules.read().await;
        let entry = rules
            .get(id)
            .ok_or_else(|| StoreError::RuleNotFound { id: id.to_string() })?;
        Ok(entry.annotated.get(&version_key(version)).cloned())
    }
}
