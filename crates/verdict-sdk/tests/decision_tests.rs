//! Integration tests for the store-backed decision loop

mod common;

use common::{credit_graph, ResponseAssertions, TestEngine};
use verdict_core::Value;
use verdict_repository::{RuleDraft, RuleStore};
use verdict_sdk::{DecisionEngineBuilder, DecisionRequest, SdkError};

#[tokio::test]
async fn decide_reaches_output() {
    let harness = TestEngine::new();
    let rule_id = harness.add_rule("interest", credit_graph(750)).await;

    let response = harness
        .decide(&rule_id, serde_json::json!({"credit_score": 800}))
        .await;

    response.assert_decided("approve");
    response.assert_output("interest_rate", Value::Number(9.0));
    assert_eq!(response.rule_version, 1.0);
    assert!(response.request_id.starts_with("req_"));
    // Annotation is on by default
    let annotated = response.annotated.expect("annotated graph");
    assert_eq!(annotated.node("2").unwrap().data.computed, Some(true));
}

#[tokio::test]
async fn decide_follows_no_edge() {
    let harness = TestEngine::new();
    let rule_id = harness.add_rule("interest", credit_graph(750)).await;

    let response = harness
        .decide(&rule_id, serde_json::json!({"credit_score": 600}))
        .await;

    response.assert_decided("decline");
    response.assert_output("interest_rate", Value::Number(14.0));
}

#[tokio::test]
async fn decide_pins_a_stored_version() {
    let harness = TestEngine::new();
    let rule_id = harness.add_rule("interest", credit_graph(750)).await;

    // Publish a stricter v1.1
    let draft = RuleDraft {
        title: "interest".to_string(),
        condition: serde_json::from_value(credit_graph(900)).unwrap(),
        ..Default::default()
    };
    harness.store.publish_version(&rule_id, draft).await.unwrap();

    // Latest (1.1) declines a score of 800...
    let latest = harness
        .decide(&rule_id, serde_json::json!({"credit_score": 800}))
        .await;
    assert_eq!(latest.rule_version, 1.1);
    latest.assert_decided("decline");

    // ...while the pinned 1.0 still approves it
    let record = serde_json::from_value(serde_json::json!({"credit_score": 800})).unwrap();
    let pinned = harness
        .engine
        .decide(DecisionRequest::new(&rule_id, record).with_version(1.0))
        .await
        .unwrap();
    assert_eq!(pinned.rule_version, 1.0);
    pinned.assert_decided("approve");
}

#[tokio::test]
async fn decide_rejected_rule_has_no_outputs() {
    // No "no" edge: a failing rule terminates without a decision
    let graph = serde_json::json!({
        "nodes": [
            {"id": "1", "type": "attributeNode", "data": {}},
            {"id": "2", "type": "conditionalNode",
             "data": {"rule": "All", "conditions": [
                 {"multiple": false, "expression": [
                     {"inputAttribute": "credit_score", "operator": ">", "value": "900"}
                 ]}
             ]}},
            {"id": "3", "type": "outputNode",
             "data": {"outputFields": [{"field": "ok", "value": "1"}]}}
        ],
        "edges": [
            {"id": "1-start-2", "source": "1", "target": "2"},
            {"id": "2-yes-3", "source": "2", "target": "3", "sourceHandle": "yes"}
        ]
    });

    let harness = TestEngine::new();
    let rule_id = harness.add_rule("strict", graph).await;
    let response = harness
        .decide(&rule_id, serde_json::json!({"credit_score": 800}))
        .await;
    response.assert_rejected();
}

#[tokio::test]
async fn persist_trace_saves_annotated_snapshot() {
    let harness = TestEngine::with_builder(DecisionEngineBuilder::new().persist_trace(true));
    let rule_id = harness.add_rule("interest", credit_graph(750)).await;

    assert!(harness
        .store
        .load_annotated(&rule_id, 1.0)
        .await
        .unwrap()
        .is_none());

    harness
        .decide(&rule_id, serde_json::json!({"credit_score": 800}))
        .await;

    let snapshot = harness
        .store
        .load_annotated(&rule_id, 1.0)
        .await
        .unwrap()
        .expect("persisted trace");
    let taken = snapshot
        .edges
        .iter()
        .find(|e| e.id == "2-yes-approve")
        .unwrap();
    assert!(taken.animated);
}

#[tokio::test]
async fn annotate_off_omits_graph_unless_requested() {
    let harness = TestEngine::with_builder(DecisionEngineBuilder::new().annotate(false));
    let rule_id = harness.add_rule("interest", credit_graph(750)).await;

    let response = harness
        .decide(&rule_id, serde_json::json!({"credit_score": 800}))
        .await;
    assert!(response.annotated.is_none());

    // A per-request trace flag overrides the engine default
    let record = serde_json::from_value(serde_json::json!({"credit_score": 800})).unwrap();
    let response = harness
        .engine
        .decide(DecisionRequest::new(&rule_id, record).with_trace())
        .await
        .unwrap();
    assert!(response.annotated.is_some());
}

#[tokio::test]
async fn unknown_rule_is_a_store_error() {
    let harness = TestEngine::new();
    let record = serde_json::from_value(serde_json::json!({})).unwrap();
    let err = harness
        .engine
        .decide(DecisionRequest::new("rule-404", record))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Store(_)));
}

#[tokio::test]
async fn caller_supplied_request_id_is_honored() {
    let harness = TestEngine::new();
    let rule_id = harness.add_rule("interest", credit_graph(750)).await;

    let record = serde_json::from_value(serde_json::json!({"credit_score": 800})).unwrap();
    let response = harness
        .engine
        .decide(
            DecisionRequest::new(&rule_id, record).with_metadata("request_id", "req_pinned_001"),
        )
        .await
        .unwrap();
    assert_eq!(response.request_id, "req_pinned_001");
    assert_eq!(
        response.metadata.get("request_id").map(String::as_str),
        Some("req_pinned_001")
    );
}

#[tokio::test]
async fn malformed_graph_is_a_runtime_error() {
    // Branch node without a "yes" edge fails validation
    let graph = serde_json::json!({
        "nodes": [
            {"id": "1", "type": "attributeNode", "data": {}},
            {"id": "2", "type": "conditionalNode", "data": {"rule": "All", "conditions": []}}
        ],
        "edges": [
            {"id": "1-start-2", "source": "1", "target": "2"}
        ]
    });

    let harness = TestEngine::new();
    let rule_id = harness.add_rule("broken", graph).await;
    let record = serde_json::from_value(serde_json::json!({})).unwrap();
    let err = harness
        .engine
        .decide(DecisionRequest::new(&rule_id, record))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Runtime(_)));
}
