//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Rule store error
    #[error("Store error: {0}")]
    Store(#[from] verdict_repository::StoreError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    Runtime(#[from] verdict_runtime::RuntimeError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
