//! Error module orchestrator.
//!
//! Every fallible operation in the crate returns [`Result`], so callers only
//! need a single error type at the boundary with the host experiment runner.

mod types;

pub use types::{GenerationError, Result};
