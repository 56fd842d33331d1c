//! `HoldTracker` — per-actor hold-down session state machine.
//!
//! # Why this exists
//!
//! "Hold right click for two seconds" cannot be observed directly: the host
//! delivers discrete interaction events whose spacing depends on client
//! input rate and network jitter, not a continuous press signal.  The
//! tracker infers a continuous hold by bounding the tick gap between
//! consecutive samples (`sample_tolerance_ticks`) and measures both elapsed
//! duration and staleness against the host's tick driver — a clock that, by
//! contrast with the event stream, is reliable.
//!
//! # State machine (per actor)
//!
//! ```text
//! NoSession ──sample──▶ Active ──idle gap > tolerance──▶ Cancelled (on_cancel)
//!                         │
//!                         ├─elapsed reaches duration──▶ satisfied-pending
//!                         │                               (elapsed frozen,
//!                         ▼                                idle still counted)
//!                       next sample while satisfied ──▶ Satisfied (execute)
//! ```
//!
//! Both terminal transitions destroy the session; a new one may begin with
//! the very next sample.  At most one session exists per actor at any time.

use std::sync::Arc;

use ix_behavior::{BehaviorDef, HoldHandler, HostContext, InteractEvent};
use ix_core::{ActorId, TickDriver, TimerId};
use rustc_hash::FxHashMap;

use crate::DispatchObserver;

/// Maximum ticks between two samples still counted as a continuous hold.
///
/// The default suits hosts whose clients re-send the interaction roughly
/// every few ticks; raise it per tracker if the event stream is known to
/// jitter more than that.
pub const DEFAULT_SAMPLE_TOLERANCE_TICKS: u64 = 5;

// ── HoldSession ──────────────────────────────────────────────────────────────

/// Live hold state for one actor.
///
/// Bound to one behavior definition for its whole lifetime; owns a clone of
/// the handler so the session keeps running even if the registry entry is
/// overwritten or removed mid-hold.
pub struct HoldSession {
    actor:          ActorId,
    def:            BehaviorDef,
    handler:        Arc<dyn HoldHandler>,
    duration_ticks: u64,
    elapsed_ticks:  u64,
    idle_ticks:     u64,
    timer:          TimerId,
}

impl HoldSession {
    #[inline]
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// The definition this session is bound to.
    #[inline]
    pub fn def(&self) -> &BehaviorDef {
        &self.def
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.def.key
    }

    /// Ticks since the session started.  Freezes at the hold duration once
    /// satisfied; idle counting continues independently.
    #[inline]
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Ticks since the last matching sample was observed.
    #[inline]
    pub fn idle_ticks(&self) -> u64 {
        self.idle_ticks
    }

    /// Handle of the owning periodic timer registration.
    #[inline]
    pub fn timer(&self) -> TimerId {
        self.timer
    }

    /// Whether the hold duration has been reached (pending a consuming
    /// sample).  Only periodic ticking can make this true.
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.elapsed_ticks >= self.duration_ticks
    }

    #[inline]
    fn is_stale(&self, tolerance: u64) -> bool {
        self.idle_ticks > tolerance
    }
}

// ── HoldTracker ──────────────────────────────────────────────────────────────

/// What a sample means for the actor's current session.  Resolved under an
/// immutable borrow so the mutating arm below can re-borrow freely.
enum Disposition {
    /// No session — start one.
    Fresh,
    /// Session bound to a different definition — silently replace it.
    Swap,
    /// Session exceeded the tolerance window before this sample arrived —
    /// cancel it (with callback) and start over.
    Stale,
    /// Sample arrived in time — reset idle, maybe complete.
    InWindow,
}

/// Owns the actor → [`HoldSession`] map and drives every session's state
/// machine from samples ([`on_sample`](HoldTracker::on_sample)) and timer
/// fires ([`on_timer`](HoldTracker::on_timer)).
pub struct HoldTracker {
    sample_tolerance_ticks: u64,
    sessions:               FxHashMap<ActorId, HoldSession>,
    /// Reverse index for timer-fire dispatch.  Invariant: exactly the
    /// `(session.timer, actor)` pair of every live session.
    by_timer:               FxHashMap<TimerId, ActorId>,
}

impl HoldTracker {
    /// A tracker with [`DEFAULT_SAMPLE_TOLERANCE_TICKS`].
    pub fn new() -> HoldTracker {
        HoldTracker::with_tolerance(DEFAULT_SAMPLE_TOLERANCE_TICKS)
    }

    /// A tracker with a per-instance tolerance override.
    pub fn with_tolerance(sample_tolerance_ticks: u64) -> HoldTracker {
        HoldTracker {
            sample_tolerance_ticks,
            sessions: FxHashMap::default(),
            by_timer: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn sample_tolerance_ticks(&self) -> u64 {
        self.sample_tolerance_ticks
    }

    /// Change the tolerance.  Applies to live sessions from their next check.
    pub fn set_sample_tolerance_ticks(&mut self, ticks: u64) {
        self.sample_tolerance_ticks = ticks;
    }

    /// The live session for `actor`, if any.
    #[inline]
    pub fn session(&self, actor: ActorId) -> Option<&HoldSession> {
        self.sessions.get(&actor)
    }

    /// Number of live sessions (one per actor, by invariant).
    #[inline]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    // ── Sample path ───────────────────────────────────────────────────────

    /// Feed one qualifying event for a hold-down definition.
    ///
    /// Called by the dispatcher after tag resolution, action filtering, and
    /// the cooldown gate; `def` is guaranteed hold-capable by that routing.
    /// Completion (`execute` + instant cooldown) happens here when a sample
    /// finds the session already satisfied — never from the timer path.
    pub fn on_sample(
        &mut self,
        def:      &BehaviorDef,
        handler:  &Arc<dyn HoldHandler>,
        event:    &mut InteractEvent,
        driver:   &mut dyn TickDriver,
        ctx:      &mut HostContext<'_>,
        observer: &mut dyn DispatchObserver,
    ) {
        let actor = event.actor;
        let disposition = match self.sessions.get(&actor) {
            None => Disposition::Fresh,
            Some(s) if s.def.key != def.key => Disposition::Swap,
            Some(s) if s.is_stale(self.sample_tolerance_ticks) => Disposition::Stale,
            Some(_) => Disposition::InWindow,
        };

        match disposition {
            Disposition::Fresh => {
                self.start(actor, def, handler, driver, observer);
            }

            Disposition::Swap => {
                // Definition swap, not a timeout: no on_cancel.
                if let Some(old) = self.take(actor) {
                    driver.cancel(old.timer);
                    observer.on_session_replaced(actor, &old.def.key, &def.key);
                }
                self.start(actor, def, handler, driver, observer);
            }

            Disposition::Stale => {
                // The sample itself proves the actor is interacting again,
                // so the stale session is closed out (with its pre-reset
                // counters) and a brand-new hold begins.  The sample is
                // consumed by the restart — it does not also advance the
                // new session.
                self.cancel(actor, true, driver, observer);
                self.start(actor, def, handler, driver, observer);
            }

            Disposition::InWindow => {
                let satisfied = match self.sessions.get_mut(&actor) {
                    Some(s) => {
                        s.idle_ticks = 0;
                        s.is_satisfied()
                    }
                    None => return,
                };
                if satisfied {
                    if let Some(session) = self.take(actor) {
                        driver.cancel(session.timer);
                        session.handler.execute(actor, event, ctx);
                        if session.def.cooldown_instant {
                            ctx.apply_cooldown(&session.def, actor, event.object_class);
                        }
                        observer.on_session_satisfied(actor, &session.def.key, session.elapsed_ticks);
                    }
                }
            }
        }
    }

    // ── Timer path ────────────────────────────────────────────────────────

    /// Advance the session owning `timer` by one tick.
    ///
    /// Called once per due timer per tick (see
    /// [`Dispatcher::tick`](crate::Dispatcher::tick)).  Fires of timers
    /// whose session is already gone are ignored.
    pub fn on_timer(
        &mut self,
        timer:    TimerId,
        driver:   &mut dyn TickDriver,
        observer: &mut dyn DispatchObserver,
    ) {
        let Some(&actor) = self.by_timer.get(&timer) else {
            return;
        };
        let (stale, satisfied) = match self.sessions.get(&actor) {
            Some(s) => (s.is_stale(self.sample_tolerance_ticks), s.is_satisfied()),
            None => return,
        };

        if stale {
            self.cancel(actor, true, driver, observer);
            return;
        }

        if let Some(s) = self.sessions.get_mut(&actor) {
            s.idle_ticks += 1;
            if satisfied {
                // Duration reached but not yet consumed by a sample:
                // elapsed freezes, only idleness keeps counting.
                return;
            }
            s.elapsed_ticks += 1;
            s.handler.on_tick_check(actor, s.elapsed_ticks, s.idle_ticks);
        }
    }

    // ── Cancellation ──────────────────────────────────────────────────────

    /// Destroy `actor`'s session: stop its timer and remove it from the map.
    ///
    /// The handler's `on_cancel` fires only when `fired_by_timeout` — an
    /// explicit or completion-driven teardown is not an abandoned hold.
    /// Returns whether a session existed.
    pub fn cancel(
        &mut self,
        actor:            ActorId,
        fired_by_timeout: bool,
        driver:           &mut dyn TickDriver,
        observer:         &mut dyn DispatchObserver,
    ) -> bool {
        let Some(session) = self.take(actor) else {
            return false;
        };
        driver.cancel(session.timer);
        if fired_by_timeout {
            session
                .handler
                .on_cancel(actor, session.elapsed_ticks, session.idle_ticks);
            observer.on_session_cancelled(
                actor,
                &session.def.key,
                session.elapsed_ticks,
                session.idle_ticks,
            );
        }
        true
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Create a session for `actor` and register its periodic timer
    /// (cadence 1).  Precondition: `actor` has no session.
    fn start(
        &mut self,
        actor:    ActorId,
        def:      &BehaviorDef,
        handler:  &Arc<dyn HoldHandler>,
        driver:   &mut dyn TickDriver,
        observer: &mut dyn DispatchObserver,
    ) {
        let timer = driver.schedule(1);
        self.by_timer.insert(timer, actor);
        self.sessions.insert(
            actor,
            HoldSession {
                actor,
                def: def.clone(),
                handler: handler.clone(),
                duration_ticks: def.hold_duration_ticks.unwrap_or(0),
                elapsed_ticks: 0,
                idle_ticks: 0,
                timer,
            },
        );
        observer.on_session_start(actor, &def.key);
    }

    /// Remove `actor`'s session from both maps without side effects.
    fn take(&mut self, actor: ActorId) -> Option<HoldSession> {
        let session = self.sessions.remove(&actor)?;
        self.by_timer.remove(&session.timer);
        Some(session)
    }
}

impl Default for HoldTracker {
    fn default() -> Self {
        HoldTracker::new()
    }
}
