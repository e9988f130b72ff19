//! Special-function resolver for temporal deltas
//!
//! Two functions exist: `date_diff(a, b, unit)` and `time_diff(a, b, unit)`.
//! Unit lengths are fixed approximations, not calendar-aware: a year is 365
//! days and a month is 30 days. The sentinels `current_date` and
//! `current_time` substitute the evaluation clock. Nothing here ever
//! raises: an invalid unit or an unparseable date degrades to `Null`, an
//! unknown function name to magnitude `0`.

use crate::context::EvalContext;
use crate::diagnostics::{report, Diagnostic, DiagnosticKind};
use chrono::{DateTime, NaiveDate, NaiveTime};
use verdict_core::{SpecialCall, Value};

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Evaluate a special-function descriptor to a magnitude.
pub(crate) fn resolve_special(
    call: &SpecialCall,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Value {
    match call.name.as_str() {
        "date_diff" => date_diff(call, ctx, node_id, diags),
        "time_diff" => time_diff(call, ctx, node_id, diags),
        other => {
            report(
                diags,
                node_id,
                DiagnosticKind::UnknownFunction {
                    function: other.to_string(),
                },
            );
            Value::Number(0.0)
        }
    }
}

fn date_diff(
    call: &SpecialCall,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Value {
    let (Some(a), Some(b), Some(unit)) = (call.args.first(), call.args.get(1), call.args.get(2))
    else {
        report(
            diags,
            node_id,
            DiagnosticKind::InvalidOperand {
                token: call.descriptor(),
            },
        );
        return Value::Null;
    };
    let (Some(d1), Some(d2)) = (
        resolve_date(a, ctx, node_id, diags),
        resolve_date(b, ctx, node_id, diags),
    ) else {
        return Value::Null;
    };

    let days = (d1 - d2).num_days().abs();
    let magnitude = match unit.as_str() {
        "years" => days / DAYS_PER_YEAR,
        "months" => days / DAYS_PER_MONTH,
        "days" => days,
        other => {
            report(
                diags,
                node_id,
                DiagnosticKind::InvalidUnit {
                    unit: other.to_string(),
                },
            );
            return Value::Null;
        }
    };
    Value::Number(magnitude as f64)
}

fn time_diff(
    call: &SpecialCall,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Value {
    let (Some(a), Some(b), Some(unit)) = (call.args.first(), call.args.get(1), call.args.get(2))
    else {
        report(
            diags,
            node_id,
            DiagnosticKind::InvalidOperand {
                token: call.descriptor(),
            },
        );
        return Value::Null;
    };
    let (Some(t1), Some(t2)) = (
        resolve_time(a, ctx, node_id, diags),
        resolve_time(b, ctx, node_id, diags),
    ) else {
        return Value::Null;
    };

    let seconds = (t1 - t2).num_seconds().abs();
    let magnitude = match unit.as_str() {
        "hours" => seconds / SECONDS_PER_HOUR,
        "minutes" => seconds / SECONDS_PER_MINUTE,
        "seconds" => seconds,
        other => {
            report(
                diags,
                node_id,
                DiagnosticKind::InvalidUnit {
                    unit: other.to_string(),
                },
            );
            return Value::Null;
        }
    };
    Value::Number(magnitude as f64)
}

fn resolve_date(
    token: &str,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Option<NaiveDate> {
    if token == "current_date" {
        return Some(ctx.now().date_naive());
    }
    match ctx.get(token) {
        Some(value) => match value.as_str().and_then(parse_date) {
            Some(date) => Some(date),
            None => {
                report(
                    diags,
                    node_id,
                    DiagnosticKind::InvalidDate {
                        attribute: token.to_string(),
                    },
                );
                None
            }
        },
        None => {
            report(
                diags,
                node_id,
                DiagnosticKind::MissingAttribute {
                    attribute: token.to_string(),
                },
            );
            None
        }
    }
}

fn resolve_time(
    token: &str,
    ctx: &EvalContext,
    node_id: &str,
    diags: &mut Vec<Diagnostic>,
) -> Option<NaiveTime> {
    if token == "current_time" {
        return Some(ctx.now().time());
    }
    match ctx.get(token) {
        Some(value) => match value.as_str().and_then(parse_time) {
            Some(time) => Some(time),
            None => {
                report(
                    diags,
                    node_id,
                    DiagnosticKind::InvalidDate {
                        attribute: token.to_string(),
                    },
                );
                None
            }
        },
        None => {
            report(
                diags,
                node_id,
                DiagnosticKind::MissingAttribute {
                    attribute: token.to_string(),
                },
            );
            None
        }
    }
}

/// Accepted date forms: ISO (`2003-11-19`), the builder's day-first form
/// (`19/11/2003`), and RFC 3339 timestamps.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}
