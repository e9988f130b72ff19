//! Verdict Core - Core types and definitions for the Verdict decision engine
//!
//! This crate provides the fundamental types used across the Verdict ecosystem:
//! - Value types for runtime data
//! - The persisted rule-graph model (wire-compatible with the authoring client)
//! - Structural validation and error types

pub mod error;
pub mod graph;
pub mod types;

// Re-export commonly used types
pub use error::GraphError;
pub use graph::{
    Connector, ConditionBlock, Edge, Expression, Node, NodeData, NodeKind, Operand, Operator,
    OutputField, Quantifier, RuleGraph, SpecialCall,
};
pub use types::Value;
