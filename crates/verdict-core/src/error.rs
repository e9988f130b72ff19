//! Error types for Verdict Core

use thiserror::Error;

/// Structural errors in a rule graph.
///
/// All of these are fatal: a graph that fails validation (or trips the
/// traversal guards) aborts evaluation before any partial trace is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Rule graph has no start node")]
    MissingStartNode,

    #[error("Rule graph has more than one start node")]
    MultipleStartNodes,

    #[error("Duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    #[error("Edge {edge_id} references a missing node")]
    DanglingEdge { edge_id: String },

    #[error("Output node {id} has outgoing edges")]
    OutputWithOutgoing { id: String },

    #[error("Branch node {id} has no \"yes\" edge")]
    BranchWithoutYes { id: String },

    #[error("Start node {id} has no outgoing edge")]
    StartWithoutSuccessor { id: String },

    #[error("Cycle detected at node {id}")]
    CycleDetected { id: String },

    #[error("Traversal exceeded {limit} steps")]
    StepLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
