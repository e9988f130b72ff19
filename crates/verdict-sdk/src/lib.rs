//! Verdict SDK - High-level API for rule evaluation
//!
//! Wraps the runtime engine and a rule store behind one `decide` call:
//! load the requested rule (latest or pinned version), evaluate it against
//! the input record, optionally persist the annotated trace, and answer
//! with the outcome.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::collections::HashMap;
//! use verdict_sdk::{DecisionEngineBuilder, DecisionRequest};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let engine = DecisionEngineBuilder::new().build();
//!
//! let mut record = HashMap::new();
//! record.insert("credit_score".to_string(), 800.0.into());
//!
//! let response = engine
//!     .decide(DecisionRequest::new("rule-1", record))
//!     .await?;
//! println!("decided: {}", response.decision_reached);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod types;

pub use builder::DecisionEngineBuilder;
pub use config::EngineConfig;
pub use engine::DecisionEngine;
pub use error::{Result, SdkError};
pub use types::{DecisionOptions, DecisionRequest, DecisionResponse};
