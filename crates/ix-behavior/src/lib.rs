//! `ix-behavior` — what behavior authors implement and register.
//!
//! A behavior is two halves:
//!
//! - a [`BehaviorDef`]: plain immutable data — the key stored on tagged
//!   objects, the trigger [`ActionSet`], cooldown settings, and (for
//!   hold-down behaviors) the required hold duration;
//! - a handler: the author's code, implementing [`InteractionHandler`] for
//!   one-shot behaviors or [`HoldHandler`] for hold-down behaviors, wrapped
//!   in the [`Handler`] enum at registration.
//!
//! The split keeps definitions serializable and comparable while handler
//! code stays an opaque trait object.  Which dispatch path a behavior takes
//! is selected by `hold_duration_ticks` being present on the definition (and
//! checked against the handler variant at registration) — not by downcasting.
//!
//! [`ActionSet`]: ix_core::ActionSet

pub mod context;
pub mod def;
pub mod error;
pub mod event;
pub mod handler;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use context::HostContext;
pub use def::{BehaviorDef, BehaviorDefBuilder};
pub use error::{DefError, DefResult};
pub use event::InteractEvent;
pub use handler::{Handler, HoldHandler, InteractionHandler};
