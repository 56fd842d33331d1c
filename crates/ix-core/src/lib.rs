//! `ix-core` — foundational types for the `rust_ix` interaction framework.
//!
//! This crate is a dependency of every other `ix-*` crate.  It intentionally
//! has no `ix-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `ActorId`, `ObjectId`, `ObjectClassId`, `TimerId`      |
//! | [`time`]       | `Tick`                                                 |
//! | [`action`]     | `ActionKind`, `ActionSet`                              |
//! | [`namespace`]  | `Namespace` tag-namespace tokens                       |
//! | [`capability`] | `TagStore`, `CooldownStore`, `TickDriver` host traits  |
//! | [`error`]      | `IxError`, `IxResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.    |

pub mod action;
pub mod capability;
pub mod error;
pub mod ids;
pub mod namespace;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{ActionKind, ActionSet};
pub use capability::{CooldownStore, TagStore, TickDriver};
pub use error::{IxError, IxResult};
pub use ids::{ActorId, ObjectClassId, ObjectId, TimerId};
pub use namespace::Namespace;
pub use time::Tick;
