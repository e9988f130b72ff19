//! Error types for Verdict Runtime

use thiserror::Error;
use verdict_core::GraphError;

/// Runtime error type.
///
/// Only structural problems are fatal; everything the expression layer can
/// hit at runtime (unknown operators, missing attributes, invalid units)
/// degrades permissively and is reported through diagnostics instead.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Malformed graph: {0}")]
    MalformedGraph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
