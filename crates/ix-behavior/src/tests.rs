//! Unit tests for ix-behavior.

use ix_core::{ActionKind, ActionSet, ActorId, CooldownStore, ObjectClassId, ObjectId};

use crate::{BehaviorDef, DefError, Handler, HoldHandler, HostContext, InteractEvent,
            InteractionHandler};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Nothing;

impl InteractionHandler for Nothing {
    fn execute(&self, _: ActorId, _: &mut InteractEvent, _: &mut HostContext<'_>) {}
}

impl HoldHandler for Nothing {
    fn on_tick_check(&self, _: ActorId, _: u64, _: u64) {}
    fn on_cancel(&self, _: ActorId, _: u64, _: u64) {}
}

/// Single-slot cooldown store — enough to observe `HostContext` writes.
#[derive(Default)]
struct OneSlot {
    remaining: u64,
}

impl CooldownStore for OneSlot {
    fn remaining(&self, _: ActorId, _: ObjectClassId) -> u64 {
        self.remaining
    }
    fn set_cooldown(&mut self, _: ActorId, _: ObjectClassId, ticks: u64) {
        self.remaining = ticks;
    }
}

// ── BehaviorDef builder ───────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn defaults() {
        let def = BehaviorDef::builder("torch")
            .actions(ActionSet::RIGHT_CLICK)
            .build()
            .unwrap();
        assert_eq!(def.key, "torch");
        assert!(!def.placeable);
        assert!(!def.has_cooldown());
        assert!(!def.cooldown_instant);
        assert!(!def.is_hold());
    }

    #[test]
    fn full_configuration() {
        let def = BehaviorDef::builder("charged_bow")
            .actions(ActionSet::RIGHT_CLICK)
            .placeable(true)
            .cooldown(40, true)
            .hold_down(40)
            .build()
            .unwrap();
        assert!(def.placeable);
        assert_eq!(def.cooldown_ticks, 40);
        assert!(def.cooldown_instant);
        assert_eq!(def.hold_duration_ticks, Some(40));
        assert!(def.is_hold());
    }

    #[test]
    fn actions_accumulate() {
        let def = BehaviorDef::builder("k")
            .actions(ActionSet::LEFT_CLICK)
            .actions(ActionSet::PHYSICAL)
            .build()
            .unwrap();
        assert!(def.actions.contains(ActionKind::LeftClickAir));
        assert!(def.actions.contains(ActionKind::Physical));
        assert_eq!(def.actions.len(), 3);
    }

    #[test]
    fn empty_key_rejected() {
        let err = BehaviorDef::builder("")
            .actions(ActionSet::CLICK)
            .build()
            .unwrap_err();
        assert!(matches!(err, DefError::EmptyKey));
    }

    #[test]
    fn empty_actions_rejected() {
        let err = BehaviorDef::builder("k").build().unwrap_err();
        assert!(matches!(err, DefError::EmptyActions { key } if key == "k"));
    }
}

// ── InteractEvent ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod event {
    use super::*;

    #[test]
    fn cancel_and_allow() {
        let mut event = InteractEvent::new(
            ActorId(1),
            ObjectId(2),
            ObjectClassId(3),
            ActionKind::RightClickAir,
        );
        assert!(!event.is_cancelled());
        event.cancel();
        assert!(event.is_cancelled());
        event.allow();
        assert!(!event.is_cancelled());
    }
}

// ── Handler ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod handler {
    use super::*;

    #[test]
    fn variant_tagging() {
        assert!(!Handler::direct(Nothing).is_hold());
        assert!(Handler::hold(Nothing).is_hold());
    }

    #[test]
    fn clone_shares_the_handler() {
        let handler = Handler::hold(Nothing);
        let clone = handler.clone();
        match (&handler, &clone) {
            (Handler::Hold(a), Handler::Hold(b)) => assert!(std::sync::Arc::ptr_eq(a, b)),
            _ => panic!("clone changed variant"),
        }
    }
}

// ── HostContext ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod context {
    use super::*;

    #[test]
    fn apply_cooldown_writes_the_definition_ticks() {
        let def = BehaviorDef::builder("k")
            .actions(ActionSet::CLICK)
            .cooldown(25, false)
            .build()
            .unwrap();
        let mut store = OneSlot::default();
        let mut ctx = HostContext { cooldowns: &mut store };
        ctx.apply_cooldown(&def, ActorId(0), ObjectClassId(0));
        assert_eq!(store.remaining, 25);
    }

    #[test]
    fn apply_cooldown_is_a_noop_without_cooldown() {
        let def = BehaviorDef::builder("k").actions(ActionSet::CLICK).build().unwrap();
        let mut store = OneSlot { remaining: 7 };
        let mut ctx = HostContext { cooldowns: &mut store };
        ctx.apply_cooldown(&def, ActorId(0), ObjectClassId(0));
        assert_eq!(store.remaining, 7); // untouched
    }

    #[test]
    fn clear_cooldown() {
        let mut store = OneSlot { remaining: 99 };
        let mut ctx = HostContext { cooldowns: &mut store };
        ctx.clear_cooldown(ActorId(0), ObjectClassId(0));
        assert_eq!(store.remaining, 0);
    }
}
