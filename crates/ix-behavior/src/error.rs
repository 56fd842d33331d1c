//! Definition and registration errors.

use thiserror::Error;

/// Errors producing or registering a behavior definition.
///
/// These all indicate caller-side misuse and surface immediately — the
/// dispatcher itself never produces them at event time.
#[derive(Debug, Error)]
pub enum DefError {
    #[error("behavior key must not be empty")]
    EmptyKey,

    #[error("behavior '{key}' has an empty trigger action set")]
    EmptyActions { key: String },

    /// The definition says one dispatch path and the handler the other
    /// (e.g. a hold duration on the definition but a `Handler::Direct`).
    #[error(
        "behavior '{key}': definition hold-down={hold_def} but handler hold-down={hold_handler}"
    )]
    HandlerMismatch {
        key:          String,
        hold_def:     bool,
        hold_handler: bool,
    },
}

pub type DefResult<T> = Result<T, DefError>;
