//! Handler traits — the main extension point for behavior authors.

use std::fmt;
use std::sync::Arc;

use ix_core::ActorId;

use crate::{HostContext, InteractEvent};

// ── InteractionHandler ───────────────────────────────────────────────────────

/// A one-shot interaction behavior.
///
/// `execute` runs synchronously on the host's logic thread for every
/// qualifying event (after tag resolution, action filtering, and the
/// cooldown gate).  It must not block.
///
/// One handler instance serves every object tagged with its key and every
/// actor triggering it, so per-actor state must be keyed by `actor` inside
/// the handler (or live host-side), never stored as a plain field.
///
/// # Example
///
/// ```rust,ignore
/// struct SmokeBomb;
///
/// impl InteractionHandler for SmokeBomb {
///     fn execute(&self, actor: ActorId, event: &mut InteractEvent, _ctx: &mut HostContext<'_>) {
///         spawn_smoke_cloud(actor, event.object);
///     }
/// }
/// ```
pub trait InteractionHandler: Send + Sync + 'static {
    /// Called once per qualifying event.
    ///
    /// For hold-down behaviors this fires when the hold duration is
    /// satisfied, not per sample.
    fn execute(&self, actor: ActorId, event: &mut InteractEvent, ctx: &mut HostContext<'_>);
}

// ── HoldHandler ──────────────────────────────────────────────────────────────

/// A hold-down interaction behavior.
///
/// The host cannot observe a continuous button press — only a stream of
/// discrete events whose spacing depends on client input rate and network
/// jitter.  The hold tracker infers "still holding" by bounding the tick gap
/// between consecutive samples and drives these two extra callbacks from its
/// own periodic timer, so their cadence is reliable even when the event
/// stream is not.
pub trait HoldHandler: InteractionHandler {
    /// Called once per tick while the hold is in progress (after counters
    /// are advanced), up to but not including the tick the duration is
    /// satisfied.  This is the hook for progress feedback — charge-up bars,
    /// sounds, particles.
    fn on_tick_check(&self, actor: ActorId, elapsed_ticks: u64, idle_ticks: u64);

    /// Called exactly once if the hold is abandoned — the actor stopped
    /// producing samples within the tolerance window.  Receives the counters
    /// as they stood when staleness was detected.  Not called when the hold
    /// completes or when a session is displaced by a different behavior.
    fn on_cancel(&self, actor: ActorId, elapsed_ticks: u64, idle_ticks: u64);
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// A registered behavior's handler, tagged by dispatch path.
///
/// `Arc` rather than `Box` so a live hold session can keep its handler
/// runnable after the registry entry is overwritten or removed.
#[derive(Clone)]
pub enum Handler {
    /// Executes directly, once per qualifying event.
    Direct(Arc<dyn InteractionHandler>),
    /// Forwarded to the hold tracker; executes when the hold is satisfied.
    Hold(Arc<dyn HoldHandler>),
}

impl Handler {
    pub fn direct(handler: impl InteractionHandler) -> Handler {
        Handler::Direct(Arc::new(handler))
    }

    pub fn hold(handler: impl HoldHandler) -> Handler {
        Handler::Hold(Arc::new(handler))
    }

    /// Whether this is the hold-tracked variant.
    #[inline]
    pub fn is_hold(&self) -> bool {
        matches!(self, Handler::Hold(_))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Direct(_) => f.write_str("Handler::Direct(..)"),
            Handler::Hold(_)   => f.write_str("Handler::Hold(..)"),
        }
    }
}
