//! Error types for the rule store layer

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No rule with the given id
    #[error("Rule not found: {id}")]
    RuleNotFound { id: String },

    /// The rule exists but not at the requested version
    #[error("Rule {id} has no version {version}")]
    VersionNotFound { id: String, version: String },

    /// Backend-specific failure
    #[error("Store error: {0}")]
    Other(String),
}
