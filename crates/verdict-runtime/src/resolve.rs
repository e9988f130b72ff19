//! Operand resolution
//!
//! Resolution rules mirror the stored-rule contract exactly: for the right
//! operand, an attribute present in the record wins over parsing the token
//! as a literal; for the left operand, the tagged variant decides between
//! the running value, a record lookup, and the special-function resolver.

use crate::context::EvalContext;
use crate::diagnostics::{report, Diagnostic, DiagnosticKind};
use crate::temporal;
use verdict_core::{Operand, Value};

/// Resolve the right operand token to a number.
///
/// Record values coerce through their numeric view (numeric strings
/// included); a present-but-non-numeric value resolves to `Null` quietly,
/// the same not-a-number outcome a failed coercion has always produced
/// for stored rules. A token that is neither an attribute nor a number
/// is reported.
pub(crate) fn resolve_right(
    token: &str,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Value {
    if let Some(value) = ctx.get(token) {
        return match value.as_number() {
            Some(n) => Value::Number(n),
            None => Value::Null,
        };
    }
    match token.trim().parse::<f64>() {
        Ok(n) => Value::Number(n),
        Err(_) => {
            report(
                diags,
                node_id,
                DiagnosticKind::InvalidOperand {
                    token: token.to_string(),
                },
            );
            Value::Null
        }
    }
}

/// Resolve the left operand.
pub(crate) fn resolve_left(
    operand: &Operand,
    running: &Value,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Value {
    match operand {
        Operand::Previous => running.clone(),
        Operand::Attribute(name) => match ctx.get(name) {
            Some(value) => match value.as_number() {
                Some(n) => Value::Number(n),
                None => Value::Null,
            },
            None => {
                report(
                    diags,
                    node_id,
                    DiagnosticKind::MissingAttribute {
                        attribute: name.clone(),
                    },
                );
                Value::Null
            }
        },
        Operand::Special(call) => temporal::resolve_special(call, ctx, node_id, diags),
    }
}

/// Resolve an output-field value token: record attribute wins, then a
/// numeric literal, then the token itself as a string.
pub(crate) fn resolve_output_value(token: &str, ctx: &EvalContext) -> Value {
    if let Some(value) = ctx.get(token) {
        return value.clone();
    }
    match token.trim().parse::<f64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::String(token.to_string()),
    }
}
