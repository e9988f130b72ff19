//! Diagnostics for permissive evaluation fallbacks
//!
//! Unknown operators, unknown special functions, invalid units, and
//! missing attributes all degrade instead of failing — that behavior is
//! kept for compatibility with existing stored rules, but it masks
//! authoring errors, so every fallback is recorded here and logged.

use serde::Serialize;
use std::fmt;

/// What degraded, and with which token
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Operator outside the supported set; the expression answered `false`
    UnknownOperator { operator: String },
    /// Special-function name outside the supported set; magnitude `0`
    UnknownFunction { function: String },
    /// Block connector outside `&&`/`||`; the merge answered `false`
    UnknownConnector { connector: String },
    /// Temporal unit outside the supported set; magnitude `null`
    InvalidUnit { unit: String },
    /// Referenced attribute absent from the input record; resolved `null`
    MissingAttribute { attribute: String },
    /// Operand token that is neither an attribute nor a number; `null`
    InvalidOperand { token: String },
    /// Attribute present but not parseable as a date/time; `null`
    InvalidDate { attribute: String },
    /// Division or modulo by zero; resolved `null`
    DivisionByZero,
}

/// One recorded fallback, tagged with the node it occurred on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    #[serde(rename = "nodeId")]
    pub node_id: String,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnknownOperator { operator } => {
                write!(f, "node {}: unknown operator {:?}", self.node_id, operator)
            }
            DiagnosticKind::UnknownFunction { function } => {
                write!(f, "node {}: unknown function {:?}", self.node_id, function)
            }
            DiagnosticKind::UnknownConnector { connector } => {
                write!(f, "node {}: unknown connector {:?}", self.node_id, connector)
            }
            DiagnosticKind::InvalidUnit { unit } => {
                write!(f, "node {}: invalid unit {:?}", self.node_id, unit)
            }
            DiagnosticKind::MissingAttribute { attribute } => {
                write!(f, "node {}: missing attribute {:?}", self.node_id, attribute)
            }
            DiagnosticKind::InvalidOperand { token } => {
                write!(f, "node {}: unresolvable operand {:?}", self.node_id, token)
            }
            DiagnosticKind::InvalidDate { attribute } => {
                write!(f, "node {}: invalid date in {:?}", self.node_id, attribute)
            }
            DiagnosticKind::DivisionByZero => {
                write!(f, "node {}: division by zero", self.node_id)
            }
        }
    }
}

/// Record a fallback against the node being evaluated.
pub(crate) fn report(diags: &mut Vec<Diagnostic>, node_id: &str, kind: DiagnosticKind) {
    let diagnostic = Diagnostic {
        node_id: node_id.to_string(),
        kind,
    };
    tracing::warn!("{}", diagnostic);
    diags.push(diagnostic);
}
