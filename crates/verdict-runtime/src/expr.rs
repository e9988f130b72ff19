//! Single-expression evaluation
//!
//! Comparison operators yield booleans; arithmetic operators yield numbers
//! that become the running value for the next expression in the block.
//! `Null` propagates: a comparison with `Null` on either side is false,
//! arithmetic with `Null` stays `Null`. An operator outside the supported
//! set answers `false` through the explicit fallback variant, so callers
//! can tell a computed false from a degraded one.

use crate::context::EvalContext;
use crate::diagnostics::{report, Diagnostic, DiagnosticKind};
use crate::resolve::{resolve_left, resolve_right};
use verdict_core::{Expression, Operator, Value};

/// The result of evaluating one expression or one block.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A value the operator actually computed
    Computed(Value),
    /// The permissive default, kept for compatibility with stored rules
    Fallback(Value),
}

impl Outcome {
    pub fn value(&self) -> &Value {
        match self {
            Outcome::Computed(v) | Outcome::Fallback(v) => v,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Outcome::Computed(v) | Outcome::Fallback(v) => v,
        }
    }

    pub fn is_truthy(&self) -> bool {
        self.value().is_truthy()
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }
}

/// Evaluate one expression given the running value of the previous
/// expression in the same block (`Null` for the first).
pub(crate) fn evaluate_expression(
    expr: &Expression,
    running: &Value,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Outcome {
    let left = resolve_left(&expr.left, running, ctx, node_id, diags);
    let right = resolve_right(&expr.value, ctx, node_id, diags);

    if expr.operator.is_comparison() {
        Outcome::Computed(Value::Bool(compare(&left, &expr.operator, &right)))
    } else if expr.operator.is_arithmetic() {
        Outcome::Computed(arithmetic(&left, &expr.operator, &right, node_id, diags))
    } else {
        report(
            diags,
            node_id,
            DiagnosticKind::UnknownOperator {
                operator: expr.operator.symbol().to_string(),
            },
        );
        Outcome::Fallback(Value::Bool(false))
    }
}

fn compare(left: &Value, op: &Operator, right: &Value) -> bool {
    // Null compared to anything is false; this is how missing attributes
    // flow through without raising
    let (Some(l), Some(r)) = (left.as_number(), right.as_number()) else {
        return false;
    };
    match op {
        Operator::Gt => l > r,
        Operator::Lt => l < r,
        Operator::Eq => l == r,
        Operator::Ne => l != r,
        Operator::Ge => l >= r,
        Operator::Le => l <= r,
        _ => false,
    }
}

fn arithmetic(
    left: &Value,
    op: &Operator,
    right: &Value,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Value {
    let (Some(l), Some(r)) = (left.as_number(), right.as_number()) else {
        return Value::Null;
    };
    match op {
        Operator::Add => Value::Number(l + r),
        Operator::Sub => Value::Number(l - r),
        Operator::Mul => Value::Number(l * r),
        Operator::Div | Operator::Mod if r == 0.0 => {
            report(diags, node_id, DiagnosticKind::DivisionByZero);
            Value::Null
        }
        Operator::Div => Value::Number(l / r),
        Operator::Mod => Value::Number(l % r),
        _ => Value::Null,
    }
}
