//! Core DecisionEngine implementation

use crate::config::EngineConfig;
use crate::error::Result;
use crate::types::{DecisionRequest, DecisionResponse};
use std::collections::HashMap;
use std::sync::Arc;
use verdict_core::{RuleGraph, Value};
use verdict_repository::RuleStore;
use verdict_runtime::{evaluate_with_limit, EvalContext, Evaluation};

/// Store-backed decision engine.
///
/// Cheap to clone and safe to share: evaluation itself is pure over
/// immutable inputs, so concurrent `decide` calls need no coordination.
#[derive(Clone)]
pub struct DecisionEngine {
    store: Arc<dyn RuleStore>,
    config: EngineConfig,
}

impl DecisionEngine {
    /// Generate a unique request ID
    /// Format: req_YYYYMMDDHHmmss_xxxxxx
    /// Example: req_20231209143052_a3f2e1
    fn generate_request_id() -> String {
        use chrono::Utc;
        use rand::Rng;

        let datetime_str = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);
        format!("req_{}_{:06x}", datetime_str, random)
    }

    /// Create an engine over a store with the default configuration.
    pub fn new(store: Arc<dyn RuleStore>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: Arc<dyn RuleStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Load the requested rule, evaluate it against the request record,
    /// and answer with the selected outcome and trace.
    pub async fn decide(&self, request: DecisionRequest) -> Result<DecisionResponse> {
        let start = std::time::Instant::now();

        // Honor a caller-supplied request id; mint one otherwise
        let request_id = request
            .metadata
            .get("request_id")
            .cloned()
            .unwrap_or_else(Self::generate_request_id);

        let rule = match request.version {
            Some(version) => {
                self.store
                    .load_rule_version(&request.rule_id, version)
                    .await?
            }
            None => self.store.load_rule(&request.rule_id).await?,
        };

        tracing::debug!(
            rule = %rule.id,
            version = rule.version,
            request = %request_id,
            "evaluating rule"
        );

        let ctx = EvalContext::new(request.record.clone());
        let evaluation = evaluate_with_limit(&rule.condition, &ctx, self.config.max_steps)?;

        if self.config.persist_trace {
            self.store
                .save_annotated(&rule.id, rule.version, evaluation.annotated.clone())
                .await?;
        }

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            rule = %rule.id,
            version = rule.version,
            decision = evaluation.decision_reached,
            output = evaluation.output_node_id.as_deref().unwrap_or("-"),
            elapsed_ms = processing_time_ms,
            "decision evaluated"
        );

        let include_trace = self.config.annotate || request.options.enable_trace;
        Ok(DecisionResponse {
            request_id,
            rule_id: rule.id,
            rule_version: rule.version,
            decision_reached: evaluation.decision_reached,
            output_node_id: evaluation.output_node_id,
            output_fields: evaluation.output_fields,
            annotated: include_trace.then_some(evaluation.annotated),
            diagnostics: evaluation.diagnostics,
            processing_time_ms,
            metadata: request.metadata,
        })
    }

    /// Evaluate a caller-supplied graph directly, bypassing the store.
    pub fn evaluate_graph(
        &self,
        graph: &RuleGraph,
        record: &HashMap<String, Value>,
    ) -> Result<Evaluation> {
        let ctx = EvalContext::new(record.clone());
        Ok(evaluate_with_limit(graph, &ctx, self.config.max_steps)?)
    }

    /// The rule store backing this engine.
    pub fn store(&self) -> Arc<dyn RuleStore> {
        self.store.clone()
    }

    /// Get configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_format() {
        let id = DecisionEngine::generate_request_id();
        assert!(id.starts_with("req_"));
        // req_ + 14 digit timestamp + _ + 6 hex chars
        assert_eq!(id.len(), 4 + 14 + 1 + 6);
    }
}
