//! Evaluation result types

use crate::diagnostics::Diagnostic;
use serde::Serialize;
use std::collections::HashMap;
use verdict_core::{RuleGraph, Value};

/// The outcome of evaluating a rule graph against an input record.
///
/// Serializes under the field names the API collaborator expects
/// (`annotatedGraph`, `decisionReached`, `outputNodeId`, `outputFields`).
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Fresh copy of the graph with trace annotations merged in
    #[serde(rename = "annotatedGraph")]
    pub annotated: RuleGraph,

    /// Whether traversal reached an output node
    #[serde(rename = "decisionReached")]
    pub decision_reached: bool,

    /// The accepted output node, when a decision was reached
    #[serde(rename = "outputNodeId", skip_serializing_if = "Option::is_none")]
    pub output_node_id: Option<String>,

    /// The accepted output node's field assignments; empty otherwise
    #[serde(rename = "outputFields")]
    pub output_fields: HashMap<String, Value>,

    /// Committed-path node ids in traversal order (start node first)
    pub visited: Vec<String>,

    /// Every permissive fallback hit during evaluation
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    /// Look up an output field by name.
    pub fn output(&self, field: &str) -> Option<&Value> {
        self.output_fields.get(field)
    }
}
