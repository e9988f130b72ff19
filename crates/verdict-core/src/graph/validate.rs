//! Structural validation of rule graphs
//!
//! Validation runs before every evaluation; a graph that fails any of
//! these checks aborts with a fatal error before a partial trace can
//! escape. Acyclicity is not proven up front — the traversal's
//! visited-set guard converts an actual cycle into `CycleDetected`.

use super::RuleGraph;
use crate::error::GraphError;
use std::collections::HashSet;

impl RuleGraph {
    /// Check the structural invariants of a stored rule graph.
    ///
    /// - node ids are unique
    /// - exactly one start node, and it has an outgoing edge
    /// - every edge endpoint resolves to a node
    /// - output nodes are terminal
    /// - every branch node has at least one `"yes"` edge
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNodeId {
                    id: node.id.clone(),
                });
            }
        }

        let mut starts = self.nodes.iter().filter(|n| n.is_start());
        let start = starts.next().ok_or(GraphError::MissingStartNode)?;
        if starts.next().is_some() {
            return Err(GraphError::MultipleStartNodes);
        }

        for edge in &self.edges {
            if !ids.contains(edge.source.as_str()) || !ids.contains(edge.target.as_str()) {
                return Err(GraphError::DanglingEdge {
                    edge_id: edge.id.clone(),
                });
            }
        }

        if self.outgoing(&start.id).next().is_none() {
            return Err(GraphError::StartWithoutSuccessor {
                id: start.id.clone(),
            });
        }

        for node in &self.nodes {
            if node.is_output() && self.outgoing(&node.id).next().is_some() {
                return Err(GraphError::OutputWithOutgoing {
                    id: node.id.clone(),
                });
            }
            if node.is_branch() && !self.outgoing(&node.id).any(|e| e.is_yes()) {
                return Err(GraphError::BranchWithoutYes {
                    id: node.id.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(json: serde_json::Value) -> RuleGraph {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_valid_graph() {
        let g = graph(serde_json::json!({
            "nodes": [
                {"id": "1", "type": "attributeNode", "data": {}},
                {"id": "2", "type": "conditionalNode", "data": {"rule": "All", "conditions": []}},
                {"id": "3", "type": "outputNode", "data": {"outputFields": []}}
            ],
            "edges": [
                {"id": "1-start-2", "source": "1", "target": "2"},
                {"id": "2-yes-3", "source": "2", "target": "3", "sourceHandle": "yes"}
            ]
        }));
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_missing_start() {
        let g = graph(serde_json::json!({
            "nodes": [{"id": "2", "type": "outputNode", "data": {}}],
            "edges": []
        }));
        assert_eq!(g.validate(), Err(GraphError::MissingStartNode));
    }

    #[test]
    fn test_dangling_edge() {
        let g = graph(serde_json::json!({
            "nodes": [
                {"id": "1", "type": "attributeNode", "data": {}},
                {"id": "2", "type": "conditionalNode", "data": {}}
            ],
            "edges": [
                {"id": "1-start-2", "source": "1", "target": "2"},
                {"id": "2-yes-9", "source": "2", "target": "9", "sourceHandle": "yes"}
            ]
        }));
        assert_eq!(
            g.validate(),
            Err(GraphError::DanglingEdge {
                edge_id: "2-yes-9".to_string()
            })
        );
    }

    #[test]
    fn test_branch_without_yes_edge() {
        let g = graph(serde_json::json!({
            "nodes": [
                {"id": "1", "type": "attributeNode", "data": {}},
                {"id": "2", "type": "conditionalNode", "data": {}},
                {"id": "3", "type": "outputNode", "data": {}}
            ],
            "edges": [
                {"id": "1-start-2", "source": "1", "target": "2"},
                {"id": "2-no-3", "source": "2", "target": "3", "sourceHandle": "no"}
            ]
        }));
        assert_eq!(
            g.validate(),
            Err(GraphError::BranchWithoutYes {
                id: "2".to_string()
            })
        );
    }

    #[test]
    fn test_output_with_outgoing_edge() {
        let g = graph(serde_json::json!({
            "nodes": [
                {"id": "1", "type": "attributeNode", "data": {}},
                {"id": "2", "type": "outputNode", "data": {}},
                {"id": "3", "type": "outputNode", "data": {}}
            ],
            "edges": [
                {"id": "1-start-2", "source": "1", "target": "2"},
                {"id": "2-3", "source": "2", "target": "3"}
            ]
        }));
        assert_eq!(
            g.validate(),
            Err(GraphError::OutputWithOutgoing {
                id: "2".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_node_id() {
        let g = graph(serde_json::json!({
            "nodes": [
                {"id": "1", "type": "attributeNode", "data": {}},
                {"id": "1", "type": "outputNode", "data": {}}
            ],
            "edges": []
        }));
        assert_eq!(
            g.validate(),
            Err(GraphError::DuplicateNodeId {
                id: "1".to_string()
            })
        );
    }
}
