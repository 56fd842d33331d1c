//! Dispatch-level error type.

use ix_behavior::DefError;
use ix_core::IxError;
use thiserror::Error;

/// Errors from dispatcher-level operations (registration, tag plumbing).
///
/// Event routing itself is infallible: every unresolvable lookup on the hot
/// path is an expected no-op, not an error.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("behavior definition error: {0}")]
    Def(#[from] DefError),

    #[error("host capability error: {0}")]
    Host(#[from] IxError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
