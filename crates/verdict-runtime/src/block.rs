//! Condition-block folding and node-level aggregation
//!
//! A block folds its expressions left to right, threading the running
//! value; the block's result is the last expression's outcome. Across
//! blocks, a trailing connector on the earlier block merges its raw
//! result with the next block's raw result — one merge per connector, the
//! consumed block is not reused — and the node quantifier is applied to
//! whatever list remains.

use crate::context::EvalContext;
use crate::diagnostics::{report, Diagnostic, DiagnosticKind};
use crate::expr::{evaluate_expression, Outcome};
use verdict_core::{ConditionBlock, Connector, Quantifier, Value};

/// One branch node's aggregated decision plus the raw per-block results
/// retained for the trace (pre-quantifier, post-merge).
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDecision {
    pub decision: bool,
    pub results: Vec<Value>,
}

/// Fold one block's expressions into a single outcome.
///
/// The last expression decides the block. A block whose final expression
/// is arithmetic yields a number rather than a boolean; that is accepted
/// and coerced by truthiness downstream.
pub fn evaluate_block(
    block: &ConditionBlock,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Outcome {
    let mut running = Value::Null;
    let mut last = Outcome::Computed(Value::Bool(false));
    for expr in &block.expression {
        last = evaluate_expression(expr, &running, ctx, node_id, diags);
        running = last.value().clone();
    }
    last
}

/// Evaluate every block of a branch node and aggregate under the
/// quantifier. Nothing short-circuits: all blocks are evaluated and the
/// merged raw list is returned whatever the decision.
pub fn evaluate_conditions(
    quantifier: Quantifier,
    blocks: &[ConditionBlock],
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> NodeDecision {
    let mut results: Vec<Outcome> = Vec::new();
    let mut pending: Option<Connector> = None;

    for block in blocks {
        let outcome = evaluate_block(block, ctx, node_id, diags);
        match pending.take() {
            Some(connector) if !results.is_empty() => {
                let last = results.len() - 1;
                let merged = merge(&results[last], &connector, &outcome, node_id, diags);
                results[last] = merged;
            }
            _ => results.push(outcome),
        }
        // The connector rides on the earlier block and governs the merge
        // with the block that follows it
        if let Some(connector) = &block.connector {
            pending = Some(connector.clone());
        }
    }

    let decision = match quantifier {
        Quantifier::All => results.iter().all(Outcome::is_truthy),
        Quantifier::Any => results.iter().any(Outcome::is_truthy),
    };

    NodeDecision {
        decision,
        results: results.into_iter().map(Outcome::into_value).collect(),
    }
}

fn merge(
    left: &Outcome,
    connector: &Connector,
    right: &Outcome,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Outcome {
    match connector {
        Connector::And => Outcome::Computed(Value::Bool(left.is_truthy() && right.is_truthy())),
        Connector::Or => Outcome::Computed(Value::Bool(left.is_truthy() || right.is_truthy())),
        Connector::Other(symbol) => {
            report(
                diags,
                node_id,
                DiagnosticKind::UnknownConnector {
                    connector: symbol.clone(),
                },
            );
            Outcome::Fallback(Value::Bool(false))
        }
    }
}
