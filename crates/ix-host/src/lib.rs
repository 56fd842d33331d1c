//! `ix-host` — reference in-memory implementations of the host capability
//! traits from `ix-core`.
//!
//! A real host backs these with its own engine (persistent item metadata, a
//! native cooldown system, the game scheduler).  These implementations keep
//! everything in plain maps so tests, demos, and headless tools can run the
//! full dispatch pipeline with no host at all.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`tags`]     | `MemoryTagStore`                                     |
//! | [`cooldowns`]| `MemoryCooldownStore`                                |
//! | [`timers`]   | `IntervalQueue` — a `TickDriver` on a due-tick queue |

pub mod cooldowns;
pub mod tags;
pub mod timers;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cooldowns::MemoryCooldownStore;
pub use tags::MemoryTagStore;
pub use timers::IntervalQueue;
