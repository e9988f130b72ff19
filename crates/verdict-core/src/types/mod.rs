//! Runtime type system for Verdict

pub mod value;

pub use value::Value;
