//! `ix-dispatch` — the dispatch-and-hold-down core of the `rust_ix`
//! interaction framework.
//!
//! This crate owns all of the framework's state: the key → definition map,
//! the per-actor hold sessions, and the routing logic between them.  Raw
//! events flow in from the host, behavior callbacks flow out:
//!
//! ```text
//! raw event → Dispatcher::handle_event
//!               → tag lookup → registry lookup → action filter → cooldown gate
//!                 → one-shot:  handler.execute  (+ instant cooldown)
//!                 → hold-down: HoldTracker::on_sample
//! tick driver → Dispatcher::tick → HoldTracker::on_timer
//!                 → on_tick_check / on_cancel / execute-when-satisfied
//! ```
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`registry`] | `Registry` — key → behavior map, tag attach/detach |
//! | [`listener`] | `Dispatcher` — event routing, the seven-step contract |
//! | [`tracker`]  | `HoldTracker`, `HoldSession` — per-actor hold state machine |
//! | [`cooldown`] | `CooldownGate` — per-actor/per-class cooldown glue |
//! | [`observer`] | `DispatchObserver` — no-op-default instrumentation hooks |
//! | [`builder`]  | `DispatchBuilder` — fluent `Dispatcher` construction |
//! | [`error`]    | `DispatchError`, `DispatchResult`                  |
//!
//! # Threading model
//!
//! Single-threaded cooperative: both entry points (`handle_event`, `tick`)
//! must be called from the host's one logic thread.  Nothing here blocks,
//! suspends, or locks; every operation is O(1) map work plus callback
//! invocations.  A multi-threaded host must serialize calls onto one owner
//! (an actor task or a mutex around the `Dispatcher`) — session creation and
//! cancellation are read-modify-write on the session map.

pub mod builder;
pub mod cooldown;
pub mod error;
pub mod listener;
pub mod observer;
pub mod registry;
pub mod tracker;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::DispatchBuilder;
pub use cooldown::CooldownGate;
pub use error::{DispatchError, DispatchResult};
pub use listener::Dispatcher;
pub use observer::{DispatchObserver, NoopObserver};
pub use registry::{Entry, Registry};
pub use tracker::{HoldSession, HoldTracker, DEFAULT_SAMPLE_TOLERANCE_TICKS};
