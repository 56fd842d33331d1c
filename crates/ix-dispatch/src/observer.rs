//! Dispatch observer trait for instrumentation and progress reporting.

use ix_behavior::InteractEvent;
use ix_core::{ActorId, ObjectClassId};

/// Callbacks invoked by the dispatcher and hold tracker at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is the framework's observability
/// surface — wire it to a logger, a metrics sink, or test assertions.
///
/// # Example — console logger
///
/// ```rust,ignore
/// struct Console;
///
/// impl DispatchObserver for Console {
///     fn on_session_cancelled(&mut self, actor: ActorId, key: &str, elapsed: u64, idle: u64) {
///         println!("{actor} let go of '{key}' after {elapsed} ticks (idle {idle})");
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// A qualifying event passed the action filter and cooldown gate and is
    /// about to be routed to its handler (or into the hold tracker).
    fn on_dispatch(&mut self, _key: &str, _event: &InteractEvent) {}

    /// A qualifying event was rejected (and cancelled) by an active cooldown.
    fn on_cooldown_reject(&mut self, _actor: ActorId, _class: ObjectClassId, _remaining: u64) {}

    /// A hold session was created for `actor`.
    fn on_session_start(&mut self, _actor: ActorId, _key: &str) {}

    /// An existing session was silently displaced because the actor's
    /// samples switched to a different behavior.  `on_cancel` does not fire
    /// for the old session.
    fn on_session_replaced(&mut self, _actor: ActorId, _old_key: &str, _new_key: &str) {}

    /// A session went stale (idle window exceeded) and was cancelled; the
    /// handler's `on_cancel` fired with the same counters.
    fn on_session_cancelled(
        &mut self,
        _actor:         ActorId,
        _key:           &str,
        _elapsed_ticks: u64,
        _idle_ticks:    u64,
    ) {}

    /// A hold completed: the duration was satisfied and the handler's
    /// `execute` fired.
    fn on_session_satisfied(&mut self, _actor: ActorId, _key: &str, _elapsed_ticks: u64) {}
}

/// A [`DispatchObserver`] that does nothing.  The default for dispatchers
/// built without [`DispatchBuilder::observer`].
///
/// [`DispatchBuilder::observer`]: crate::DispatchBuilder::observer
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
