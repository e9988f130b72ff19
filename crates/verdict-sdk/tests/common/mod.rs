//! Shared helpers for SDK integration tests

use std::collections::HashMap;
use std::sync::Arc;
use verdict_core::Value;
use verdict_repository::{MemoryRuleStore, RuleDraft, RuleStore};
use verdict_sdk::{DecisionEngine, DecisionEngineBuilder, DecisionRequest, DecisionResponse};

pub struct TestEngine {
    pub engine: DecisionEngine,
    pub store: Arc<MemoryRuleStore>,
}

impl TestEngine {
    pub fn new() -> Self {
        Self::with_builder(DecisionEngineBuilder::new())
    }

    pub fn with_builder(builder: DecisionEngineBuilder) -> Self {
        let store = Arc::new(MemoryRuleStore::new());
        let engine = builder.with_store(store.clone()).build();
        Self { engine, store }
    }

    /// Store a rule whose condition graph is the given JSON; returns its id.
    pub async fn add_rule(&self, title: &str, graph: serde_json::Value) -> String {
        let draft = RuleDraft {
            title: title.to_string(),
            condition: serde_json::from_value(graph).expect("test graph must deserialize"),
            ..Default::default()
        };
        self.store
            .create_rule(draft)
            .await
            .expect("create_rule")
            .id
    }

    pub async fn decide(&self, rule_id: &str, record: serde_json::Value) -> DecisionResponse {
        let record: HashMap<String, Value> =
            serde_json::from_value(record).expect("test record must deserialize");
        self.engine
            .decide(DecisionRequest::new(rule_id, record))
            .await
            .expect("decide")
    }
}

pub trait ResponseAssertions {
    fn assert_decided(&self, output_node: &str);
    fn assert_rejected(&self);
    fn assert_output(&self, field: &str, expected: Value);
}

impl ResponseAssertions for DecisionResponse {
    fn assert_decided(&self, output_node: &str) {
        assert!(self.decision_reached, "expected a decision to be reached");
        assert_eq!(self.output_node_id.as_deref(), Some(output_node));
    }

    fn assert_rejected(&self) {
        assert!(!self.decision_reached, "expected no decision");
        assert!(self.output_node_id.is_none());
        assert!(self.output_fields.is_empty());
    }

    fn assert_output(&self, field: &str, expected: Value) {
        assert_eq!(self.output(field), Some(&expected), "output field {field}");
    }
}

/// start -> branch(credit_score > threshold) -yes-> "approve" output
///                                           -no->  "decline" output
pub fn credit_graph(threshold: i64) -> serde_json::Value {
    serde_json::json!({
        "nodes": [
            {"id": "1", "type": "attributeNode",
             "data": {"label": "Loan Interest Rate",
                      "inputAttributes": ["credit_score"],
                      "outputAttributes": ["interest_rate"]}},
            {"id": "2", "type": "conditionalNode",
             "data": {"rule": "All", "conditions": [
                 {"multiple": false, "expression": [
                     {"inputAttribute": "credit_score", "operator": ">",
                      "value": threshold.to_string()}
                 ]}
             ]}},
            {"id": "approve", "type": "outputNode",
             "data": {"outputFields": [{"field": "interest_rate", "value": "9"}]}},
            {"id": "decline", "type": "outputNode",
             "data": {"outputFields": [{"field": "interest_rate", "value": "14"}]}}
        ],
        "edges": [
            {"id": "1-start-2", "source": "1", "target": "2"},
            {"id": "2-yes-approve", "source": "2", "target": "approve", "sourceHandle": "yes"},
            {"id": "2-no-decline", "source": "2", "target": "decline", "sourceHandle": "no"}
        ]
    })
}
