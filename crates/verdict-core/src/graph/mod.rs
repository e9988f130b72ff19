//! The persisted rule-graph model
//!
//! This is the wire format the authoring client stores and the renderer
//! reads back. Field names are part of the contract and must survive a
//! serialize round trip byte-for-byte; every struct carries a flattened
//! `extra` map so keys the engine doesn't interpret (layout positions,
//! dimensions, selection state) pass through untouched.

mod condition;
mod edge;
mod node;
mod operator;
mod validate;

pub use condition::{ConditionBlock, Expression, Operand, OutputField, Quantifier, SpecialCall};
pub use edge::{Edge, EdgeMarker, EdgeStyle};
pub use node::{Node, NodeData, NodeKind};
pub use operator::{Connector, Operator};

use serde::{Deserialize, Serialize};

/// A stored business rule: a DAG of one start node, branch nodes, and
/// output nodes. The engine treats it as an immutable value; evaluation
/// returns a fresh annotated copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RuleGraph {
    /// Parse a graph from its stored JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.id == id)
    }

    /// The unique start node, if present.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.is_start())
    }

    /// Outgoing edges of a node, in stored edge-list order. Candidate
    /// iteration order during fan-out resolution derives from this.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// The first edge from `source` to `target`, if any.
    pub fn edge_between(&self, source: &str, target: &str) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }
}
