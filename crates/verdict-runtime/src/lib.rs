//! Verdict Runtime - Execution engine for stored rule graphs
//!
//! This crate evaluates a rule graph against an input record: it resolves
//! operands, folds condition blocks, aggregates block results under the
//! node quantifier, walks the graph to exactly one terminal outcome, and
//! returns a fresh annotated copy of the graph recording which nodes and
//! edges were taken, accepted, or pruned.

pub mod annotate;
pub mod block;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod expr;
mod resolve;
pub mod result;
mod temporal;
pub mod traverse;

// Re-export main types
pub use annotate::{ACCEPT_COLOR, PRUNE_COLOR};
pub use block::{evaluate_block, evaluate_conditions, NodeDecision};
pub use context::EvalContext;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{Result, RuntimeError};
pub use expr::Outcome;
pub use result::Evaluation;
pub use traverse::{evaluate, evaluate_with_context, evaluate_with_limit};
