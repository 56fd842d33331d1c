//! Cooldown gate — thin glue over the host's [`CooldownStore`].
//!
//! [`CooldownStore`]: ix_core::CooldownStore

use ix_behavior::BehaviorDef;
use ix_core::{ActorId, CooldownStore, ObjectClassId};

/// Borrowed view over the host cooldown store with the framework's two
/// policies attached: cooldowns are keyed `(actor, object class)`, and a
/// definition without a cooldown never writes.
pub struct CooldownGate<'a> {
    store: &'a mut dyn CooldownStore,
}

impl<'a> CooldownGate<'a> {
    pub fn new(store: &'a mut dyn CooldownStore) -> CooldownGate<'a> {
        CooldownGate { store }
    }

    /// Whether `(actor, class)` is currently on cooldown.
    #[inline]
    pub fn active(&self, actor: ActorId, class: ObjectClassId) -> bool {
        self.store.remaining(actor, class) > 0
    }

    /// Remaining cooldown ticks for `(actor, class)`; zero when inactive.
    #[inline]
    pub fn remaining(&self, actor: ActorId, class: ObjectClassId) -> u64 {
        self.store.remaining(actor, class)
    }

    /// Apply `def`'s cooldown for `(actor, class)`.  No-op for definitions
    /// without one.
    pub fn apply(&mut self, def: &BehaviorDef, actor: ActorId, class: ObjectClassId) {
        if def.has_cooldown() {
            self.store.set_cooldown(actor, class, def.cooldown_ticks);
        }
    }

    /// Clear any active cooldown for `(actor, class)`.
    pub fn clear(&mut self, actor: ActorId, class: ObjectClassId) {
        self.store.set_cooldown(actor, class, 0);
    }
}
