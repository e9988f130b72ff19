//! Node types for the persisted rule graph

use super::condition::{ConditionBlock, OutputField, Quantifier};
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Node discriminator, matching the authoring client's type strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// The start node: rule metadata only, never evaluated
    #[serde(rename = "attributeNode")]
    Attribute,
    /// A branch node: quantifier plus ordered condition blocks
    #[serde(rename = "conditionalNode")]
    Conditional,
    /// A terminal node producing named field assignments
    #[serde(rename = "outputNode")]
    Output,
}

/// Kind-specific node payload.
///
/// One struct covers all three node kinds; fields that don't apply are
/// simply absent. The `computed` / `result` / `color` keys are the trace
/// annotation slots — absent on the canonical graph, written onto the
/// annotated copy an evaluation returns. Unknown keys (labels, layout
/// positions, dimensions) pass through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        rename = "inputAttributes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub input_attributes: Option<Vec<String>>,
    #[serde(
        rename = "outputAttributes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub output_attributes: Option<Vec<String>>,

    /// Branch quantifier (wire values `"All"` / `"Any"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Quantifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<ConditionBlock>>,

    #[serde(
        rename = "outputFields",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub output_fields: Option<Vec<OutputField>>,

    /// Annotation: the node's computed decision (`true` on the accepted
    /// output node)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed: Option<bool>,
    /// Annotation: raw per-block results, pre-quantifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Value>>,
    /// Annotation: accept/prune color for rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One node of the rule graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub data: NodeData,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Node {
    pub fn is_start(&self) -> bool {
        self.kind == NodeKind::Attribute
    }

    pub fn is_branch(&self) -> bool {
        self.kind == NodeKind::Conditional
    }

    pub fn is_output(&self) -> bool {
        self.kind == NodeKind::Output
    }
}
