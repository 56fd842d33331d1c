//! `Dispatcher` — consumes raw host events and routes them to behaviors.

use ix_behavior::{BehaviorDef, Handler, HoldHandler, HostContext, InteractEvent,
                  InteractionHandler};
use ix_core::{CooldownStore, ObjectId, TagStore, Tick, TickDriver};

use crate::{CooldownGate, DispatchObserver, DispatchResult, HoldTracker, NoopObserver, Registry};

/// The framework's front door: owns the registry, the hold tracker, and the
/// three host capabilities, and wires them together.
///
/// Two entry points, both driven from the host's single logic thread:
///
/// - [`handle_event`](Dispatcher::handle_event) for every raw interaction
///   event, as it is delivered;
/// - [`tick`](Dispatcher::tick) once per logic tick, *after* that tick's
///   events, to advance live hold sessions.
///
/// Fields are public — the host owns its state: tests and hosts may reach
/// into `registry`, `tracker`, or the capability implementations directly
/// between calls.
///
/// Create via [`DispatchBuilder`](crate::DispatchBuilder).
pub struct Dispatcher<T, C, D, O = NoopObserver>
where
    T: TagStore,
    C: CooldownStore,
    D: TickDriver,
    O: DispatchObserver,
{
    /// Key → behavior map plus the tag namespace.
    pub registry: Registry,

    /// Per-actor hold-down session state.
    pub tracker: HoldTracker,

    /// Host tag persistence.
    pub tags: T,

    /// Host cooldown storage.
    pub cooldowns: C,

    /// Host periodic-timer scheduling.
    pub driver: D,

    /// Instrumentation hooks.
    pub observer: O,
}

impl<T, C, D, O> Dispatcher<T, C, D, O>
where
    T: TagStore,
    C: CooldownStore,
    D: TickDriver,
    O: DispatchObserver,
{
    // ── Event path ────────────────────────────────────────────────────────

    /// Route one raw interaction event.
    ///
    /// The full contract, in order:
    ///
    /// 1. Untagged object, or no key under this registry's namespace →
    ///    do nothing (the event passes through untouched).
    /// 2. Key resolves to no registered behavior → do nothing.
    /// 3. Event's action kind not in the definition's trigger set →
    ///    do nothing.
    /// 4. Active cooldown for `(actor, object class)` → cancel the event,
    ///    fire no callbacks.
    /// 5. Definition not `placeable` → cancel the event (independently of
    ///    step 4; both may apply).
    /// 6. One-shot definition → `execute` synchronously, then apply the
    ///    cooldown if `cooldown_ticks > 0 && cooldown_instant`.
    /// 7. Hold-down definition → forward to the hold tracker as a sample.
    ///
    /// Side effects are confined to the event's cancellation flag, cooldown
    /// application, and behavior callbacks.  Never blocks.
    pub fn handle_event(&mut self, event: &mut InteractEvent) {
        let Some(key) = self.registry.resolve(&self.tags, event.object) else {
            return;
        };
        let Some(entry) = self.registry.lookup(&key) else {
            return;
        };
        let def = entry.def();
        if !def.actions.contains(event.action) {
            return;
        }

        let gate = CooldownGate::new(&mut self.cooldowns);
        let remaining = gate.remaining(event.actor, event.object_class);
        if remaining > 0 {
            event.cancel();
            self.observer
                .on_cooldown_reject(event.actor, event.object_class, remaining);
            return;
        }

        if !def.placeable {
            event.cancel();
        }
        self.observer.on_dispatch(&key, event);

        // Clone out of the registry entry so the handler can in turn borrow
        // the dispatcher's other fields.
        let def = def.clone();
        let handler = entry.handler().clone();
        match handler {
            Handler::Direct(h) => {
                let mut ctx = HostContext { cooldowns: &mut self.cooldowns };
                h.execute(event.actor, event, &mut ctx);
                if def.cooldown_instant {
                    CooldownGate::new(&mut self.cooldowns).apply(
                        &def,
                        event.actor,
                        event.object_class,
                    );
                }
            }
            Handler::Hold(h) => {
                let mut ctx = HostContext { cooldowns: &mut self.cooldowns };
                self.tracker
                    .on_sample(&def, &h, event, &mut self.driver, &mut ctx, &mut self.observer);
            }
        }
    }

    // ── Tick path ─────────────────────────────────────────────────────────

    /// Advance all live hold sessions whose timer fires at `now`.
    ///
    /// Call once per logic tick, after delivering that tick's events.
    pub fn tick(&mut self, now: Tick) {
        for timer in self.driver.due(now) {
            self.tracker
                .on_timer(timer, &mut self.driver, &mut self.observer);
        }
    }

    // ── Convenience passthroughs ──────────────────────────────────────────

    /// Register a behavior (see [`Registry::register`]).
    pub fn register(&mut self, def: BehaviorDef, handler: Handler) -> DispatchResult<()> {
        self.registry.register(def, handler)?;
        Ok(())
    }

    /// Register a one-shot behavior.
    pub fn register_direct(
        &mut self,
        def:     BehaviorDef,
        handler: impl InteractionHandler,
    ) -> DispatchResult<()> {
        self.register(def, Handler::direct(handler))
    }

    /// Register a hold-down behavior.
    pub fn register_hold(
        &mut self,
        def:     BehaviorDef,
        handler: impl HoldHandler,
    ) -> DispatchResult<()> {
        self.register(def, Handler::hold(handler))
    }

    /// Remove the behavior for `key`.  In-flight hold sessions keep running
    /// (see [`Registry`] docs for the policy).
    pub fn unregister(&mut self, key: &str) -> bool {
        self.registry.unregister(key)
    }

    /// Tag `object` with `key` in this dispatcher's tag store.
    pub fn attach(&mut self, object: ObjectId, key: &str) -> DispatchResult<()> {
        self.registry.attach(&mut self.tags, object, key)?;
        Ok(())
    }

    /// Remove this dispatcher's tag from `object`.
    pub fn detach(&mut self, object: ObjectId) -> DispatchResult<()> {
        self.registry.detach(&mut self.tags, object)?;
        Ok(())
    }
}
