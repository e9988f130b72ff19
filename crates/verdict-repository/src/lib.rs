//! Rule store abstraction for the Verdict decision engine
//!
//! This crate defines the interface the engine consumes for loading and
//! persisting versioned rules, plus an in-memory backend used by the SDK
//! default and by tests. Ownership and authorization checks live with the
//! API collaborator, not here.
//!
//! # Quick Start
//!
//! ```no_run
//! use verdict_repository::{MemoryRuleStore, RuleDraft, RuleStore};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = MemoryRuleStore::new();
//!
//! let rule = store
//!     .create_rule(RuleDraft {
//!         title: "Loan Interest Rate".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Latest version
//! let latest = store.load_rule(&rule.id).await?;
//!
//! // Or pin a specific one
//! let pinned = store.load_rule_version(&rule.id, 1.0).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryRuleStore;
pub use models::{next_version, version_key, RuleDraft, StoredRule};
pub use traits::RuleStore;
