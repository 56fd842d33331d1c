//! Framework error type.
//!
//! Sub-crates define their own error enums for their own concerns and either
//! convert `IxError` in via `From` or wrap it as one variant.  Note what is
//! *not* an error anywhere in this framework: an unresolved tag, an unknown
//! key, an action-kind mismatch, and an active cooldown are all expected
//! steady-state outcomes and are handled as silent no-ops by the dispatcher.

use thiserror::Error;

use crate::ObjectId;

/// The top-level error type for `ix-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum IxError {
    /// The object cannot carry tags — a host-side precondition violation,
    /// surfaced immediately rather than swallowed.
    #[error("object {0} cannot carry tags")]
    TagRejected(ObjectId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ix-*` crates.
pub type IxResult<T> = Result<T, IxError>;
