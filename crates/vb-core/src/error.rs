//! Engine error type.
//!
//! Rule violations are never errors: they resolve to rulings.  `VbError`
//! covers construction-time problems and read-only queries about agents the
//! engine has never heard of.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `vb-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum VbError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `vb-*` crates.
pub type VbResult<T> = Result<T, VbError>;
