//! Builder pattern for DecisionEngine

use crate::config::EngineConfig;
use crate::engine::DecisionEngine;
use std::sync::Arc;
use verdict_repository::{MemoryRuleStore, RuleStore};

/// Builder for [`DecisionEngine`]
///
/// # Example
///
/// ```rust,ignore
/// use verdict_sdk::DecisionEngineBuilder;
///
/// // In-memory store (development, tests)
/// let engine = DecisionEngineBuilder::new()
///     .persist_trace(true)
///     .build();
///
/// // Custom backend
/// let engine = DecisionEngineBuilder::new()
///     .with_store(my_store)
///     .build();
/// ```
#[derive(Default)]
pub struct DecisionEngineBuilder {
    config: EngineConfig,
    store: Option<Arc<dyn RuleStore>>,
}

impl DecisionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            store: None,
        }
    }

    /// Use a specific rule store backend.
    pub fn with_store(mut self, store: Arc<dyn RuleStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Include the annotated graph in responses.
    pub fn annotate(mut self, enabled: bool) -> Self {
        self.config.annotate = enabled;
        self
    }

    /// Persist every evaluation's trace back to the store.
    pub fn persist_trace(mut self, enabled: bool) -> Self {
        self.config.persist_trace = enabled;
        self
    }

    /// Cap traversal steps.
    pub fn max_steps(mut self, limit: usize) -> Self {
        self.config.max_steps = Some(limit);
        self
    }

    /// Build the engine; defaults to a fresh in-memory store.
    pub fn build(self) -> DecisionEngine {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryRuleStore::new()));
        DecisionEngine::with_config(store, self.config)
    }
}
