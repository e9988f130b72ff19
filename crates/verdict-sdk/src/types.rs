//! Request/Response types for DecisionEngine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use verdict_core::{RuleGraph, Value};
use verdict_runtime::Diagnostic;

/// Decision request options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionOptions {
    /// Force the annotated graph into the response even when the engine
    /// config leaves it out
    #[serde(default)]
    pub enable_trace: bool,
}

/// One evaluation request: which rule, which version, which record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    #[serde(rename = "ruleId")]
    pub rule_id: String,

    /// Pin a stored version; latest when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,

    /// The input record the rule is evaluated against
    pub record: HashMap<String, Value>,

    /// Request metadata (a caller-supplied `request_id` is honored)
    #[serde(default)]
    pub metadata: HashMap<String, String>,

    #[serde(default)]
    pub options: DecisionOptions,
}

impl DecisionRequest {
    pub fn new(rule_id: impl Into<String>, record: HashMap<String, Value>) -> Self {
        Self {
            rule_id: rule_id.into(),
            version: None,
            record,
            metadata: HashMap::new(),
            options: DecisionOptions::default(),
        }
    }

    /// Pin a specific stored version.
    pub fn with_version(mut self, version: f64) -> Self {
        self.version = Some(version);
        self
    }

    /// Force trace inclusion for this request.
    pub fn with_trace(mut self) -> Self {
        self.options.enable_trace = true;
        self
    }

    /// Add metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// The outcome of one decision request.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,

    #[serde(rename = "ruleId")]
    pub rule_id: String,

    /// The rule version that was actually evaluated
    #[serde(rename = "ruleVersion")]
    pub rule_version: f64,

    #[serde(rename = "decisionReached")]
    pub decision_reached: bool,

    #[serde(rename = "outputNodeId", skip_serializing_if = "Option::is_none")]
    pub output_node_id: Option<String>,

    #[serde(rename = "outputFields")]
    pub output_fields: HashMap<String, Value>,

    /// Annotated trace copy of the rule graph, when enabled
    #[serde(rename = "annotatedGraph", skip_serializing_if = "Option::is_none")]
    pub annotated: Option<RuleGraph>,

    /// Permissive fallbacks hit during evaluation
    pub diagnostics: Vec<Diagnostic>,

    #[serde(rename = "processingTimeMs")]
    pub processing_time_ms: u64,

    pub metadata: HashMap<String, String>,
}

impl DecisionResponse {
    /// Look up an output field by name.
    pub fn output(&self, field: &str) -> Option<&Value> {
        self.output_fields.get(field)
    }
}
