//! Trace annotation
//!
//! The annotator works on a deep copy of the canonical graph and writes
//! the trace into the same fields the renderer reads: `computed`, `result`
//! and `color` on node data; `animated`, `style.stroke` and
//! `markerEnd.color` on edges. The canonical graph is never touched.

use verdict_core::{RuleGraph, Value};

/// Stroke/fill color for taken edges and accepted nodes
pub const ACCEPT_COLOR: &str = "#22c55e";
/// Stroke/fill color for pruned nodes and their inbound edges
pub const PRUNE_COLOR: &str = "#ef4444";

#[derive(Debug)]
pub(crate) struct Annotator {
    graph: RuleGraph,
}

impl Annotator {
    pub fn new(canonical: &RuleGraph) -> Self {
        Self {
            graph: canonical.clone(),
        }
    }

    /// Store a branch node's computed decision and raw per-block results.
    pub fn record_branch(&mut self, id: &str, decision: bool, results: &[Value]) {
        if let Some(node) = self.graph.node_mut(id) {
            node.data.computed = Some(decision);
            node.data.result = Some(results.to_vec());
        }
    }

    /// Color a node on the committed path.
    pub fn accept_node(&mut self, id: &str) {
        if let Some(node) = self.graph.node_mut(id) {
            node.data.color = Some(ACCEPT_COLOR.to_string());
        }
    }

    /// Mark the accepted output node.
    pub fn mark_output(&mut self, id: &str) {
        if let Some(node) = self.graph.node_mut(id) {
            node.data.computed = Some(true);
            node.data.color = Some(ACCEPT_COLOR.to_string());
        }
    }

    /// Color an evaluated-but-not-committed node.
    pub fn prune_node(&mut self, id: &str) {
        if let Some(node) = self.graph.node_mut(id) {
            node.data.color = Some(PRUNE_COLOR.to_string());
        }
    }

    /// Mark a traversed edge: animated, accept-colored stroke and marker.
    pub fn take_edge(&mut self, id: &str) {
        if let Some(edge) = self.graph.edge_mut(id) {
            edge.animated = true;
            edge.style.stroke = Some(ACCEPT_COLOR.to_string());
            edge.marker_end.color = Some(ACCEPT_COLOR.to_string());
        }
    }

    /// Mark a pruned fan-out sibling's inbound edge.
    pub fn prune_edge(&mut self, id: &str) {
        if let Some(edge) = self.graph.edge_mut(id) {
            edge.style.stroke = Some(PRUNE_COLOR.to_string());
            edge.marker_end.color = Some(PRUNE_COLOR.to_string());
        }
    }

    pub fn into_graph(self) -> RuleGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> RuleGraph {
        serde_json::from_value(serde_json::json!({
            "nodes": [
                {"id": "2", "type": "conditionalNode", "data": {"rule": "All", "conditions": []}},
                {"id": "3", "type": "outputNode", "data": {"outputFields": []},
                 "position": {"x": 1.0, "y": 2.0}}
            ],
            "edges": [
                {"id": "2-yes-3", "source": "2", "target": "3", "sourceHandle": "yes",
                 "animated": false, "style": {"strokeWidth": 2},
                 "markerEnd": {"type": "arrowclosed"}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_canonical_graph_untouched() {
        let canonical = graph();
        let mut annotator = Annotator::new(&canonical);
        annotator.record_branch("2", true, &[Value::Bool(true)]);
        annotator.take_edge("2-yes-3");
        annotator.mark_output("3");

        // The input graph still has no annotations
        assert!(canonical.node("2").unwrap().data.computed.is_none());
        assert!(!canonical.edges[0].animated);

        let annotated = annotator.into_graph();
        assert_eq!(annotated.node("2").unwrap().data.computed, Some(true));
        assert_eq!(
            annotated.node("2").unwrap().data.result,
            Some(vec![Value::Bool(true)])
        );
        assert!(annotated.edges[0].animated);
        assert_eq!(
            annotated.edges[0].style.stroke.as_deref(),
            Some(ACCEPT_COLOR)
        );
        assert_eq!(
            annotated.edges[0].marker_end.color.as_deref(),
            Some(ACCEPT_COLOR)
        );
    }

    #[test]
    fn test_annotation_preserves_existing_edge_fields() {
        let mut annotator = Annotator::new(&graph());
        annotator.take_edge("2-yes-3");
        let annotated = annotator.into_graph();

        let json = serde_json::to_value(&annotated).unwrap();
        assert_eq!(json["edges"][0]["style"]["strokeWidth"], 2);
        assert_eq!(json["edges"][0]["style"]["stroke"], ACCEPT_COLOR);
        assert_eq!(json["edges"][0]["markerEnd"]["type"], "arrowclosed");
        assert_eq!(json["nodes"][1]["position"]["x"], 1.0);
    }

    #[test]
    fn test_prune_marks() {
        let mut annotator = Annotator::new(&graph());
        annotator.prune_node("3");
        annotator.prune_edge("2-yes-3");
        let annotated = annotator.into_graph();

        assert_eq!(
            annotated.node("3").unwrap().data.color.as_deref(),
            Some(PRUNE_COLOR)
        );
        assert!(!annotated.edges[0].animated);
        assert_eq!(annotated.edges[0].style.stroke.as_deref(), Some(PRUNE_COLOR));
    }
}
