//! Host capability traits — the seams between this framework and the host.
//!
//! The framework never persists tags, tracks cooldowns, or owns a scheduler
//! itself; it consumes these three capabilities from the host.  All three are
//! assumed to be driven from the host's single logic thread, so no trait here
//! requires `Send`/`Sync` and no implementation needs internal locking.
//! Reference in-memory implementations live in `ix-host`.

use crate::{ActorId, IxResult, Namespace, ObjectClassId, ObjectId, Tick, TimerId};

// ── TagStore ─────────────────────────────────────────────────────────────────

/// Persistent string tags on host objects, partitioned by namespace.
///
/// The registry stores its behavior key under its own [`Namespace`]; a store
/// shared with other subsystems must keep entries under different namespaces
/// independent.
pub trait TagStore {
    /// Whether `object` carries any tag under `namespace`.
    fn has_tag(&self, object: ObjectId, namespace: &Namespace) -> bool;

    /// The tag value for `object` under `namespace`, if present.
    fn tag(&self, object: ObjectId, namespace: &Namespace) -> Option<String>;

    /// Persist `value` on `object` under `namespace`, overwriting any
    /// previous entry.
    ///
    /// # Errors
    /// [`IxError::TagRejected`] if `object` cannot carry tags (host-side
    /// precondition violation — e.g. an item without metadata).  Never
    /// silently ignored.
    ///
    /// [`IxError::TagRejected`]: crate::IxError::TagRejected
    fn set_tag(&mut self, object: ObjectId, namespace: &Namespace, value: &str) -> IxResult<()>;

    /// Remove the entry for `object` under `namespace`.  Removing an absent
    /// entry is a no-op, but the object itself must be taggable.
    fn remove_tag(&mut self, object: ObjectId, namespace: &Namespace) -> IxResult<()>;
}

// ── CooldownStore ────────────────────────────────────────────────────────────

/// Per-actor, per-object-class cooldown windows.
///
/// Cooldowns attach to the *class* of object the actor used (so swapping to
/// an identical item doesn't evade them), and expire on their own as the
/// host's clock advances — the framework only ever sets and queries.
pub trait CooldownStore {
    /// Remaining cooldown ticks for `(actor, class)`.  Zero means no active
    /// cooldown.
    fn remaining(&self, actor: ActorId, class: ObjectClassId) -> u64;

    /// Start (or overwrite) a cooldown of `ticks` for `(actor, class)`.
    /// Setting zero clears any active cooldown.
    fn set_cooldown(&mut self, actor: ActorId, class: ObjectClassId, ticks: u64);
}

// ── TickDriver ───────────────────────────────────────────────────────────────

/// Periodic timer registration on the host's logic-tick clock.
///
/// # Polled handle model
///
/// The driver does not invoke callbacks.  Instead the consumer schedules a
/// timer, keeps the returned [`TimerId`], and each tick asks the driver which
/// timers fire *now* via [`due`](TickDriver::due).  This keeps all session
/// state in a single owner — no per-timer closures capturing mutable state —
/// and makes tick processing an ordinary `&mut self` method call on the
/// consumer.
///
/// # Contract
///
/// - A timer scheduled while processing tick `N` first fires at tick `N`
///   (zero delay), then every `cadence_ticks` after that.  Hosts must
///   therefore deliver a tick's interaction events *before* polling `due`
///   for that tick.
/// - `due(now)` reports each firing timer exactly once per due tick, in
///   ascending registration order, and never reports a cancelled timer.
/// - `now` must not decrease across calls.
pub trait TickDriver {
    /// Register a repeating timer with the given cadence (≥ 1).
    fn schedule(&mut self, cadence_ticks: u64) -> TimerId;

    /// Deregister `timer`.  Cancelling an already-cancelled timer is a no-op.
    fn cancel(&mut self, timer: TimerId);

    /// All timers firing at `now`, re-armed for their next cadence.
    fn due(&mut self, now: Tick) -> Vec<TimerId>;
}
