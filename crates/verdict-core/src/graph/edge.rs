//! Edge types for the persisted rule graph

use serde::{Deserialize, Serialize};

/// Inline edge style; `stroke` is the annotation slot, everything else
/// (stroke width, dash patterns) passes through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EdgeStyle {
    pub fn is_empty(&self) -> bool {
        self.stroke.is_none() && self.extra.is_empty()
    }
}

/// Arrowhead marker; `color` is the annotation slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EdgeMarker {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.extra.is_empty()
    }
}

/// A directed edge.
///
/// `sourceHandle` carries the branch label: `"yes"`, `"no"`, or absent on
/// the start node's single unlabeled edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub animated: bool,
    #[serde(default, skip_serializing_if = "EdgeStyle::is_empty")]
    pub style: EdgeStyle,
    #[serde(
        rename = "markerEnd",
        default,
        skip_serializing_if = "EdgeMarker::is_empty"
    )]
    pub marker_end: EdgeMarker,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Edge {
    pub fn is_yes(&self) -> bool {
        self.source_handle.as_deref() == Some("yes")
    }

    pub fn is_no(&self) -> bool {
        self.source_handle.as_deref() == Some("no")
    }

    pub fn is_unlabeled(&self) -> bool {
        self.source_handle.is_none()
    }
}
