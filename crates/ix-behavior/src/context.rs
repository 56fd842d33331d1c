//! Host capability access passed to behavior callbacks.

use ix_core::{ActorId, CooldownStore, ObjectClassId};

use crate::BehaviorDef;

/// Mutable host access handed to [`InteractionHandler::execute`].
///
/// Today this is just the cooldown store — it exists so behaviors with
/// `cooldown_instant = false` can apply their definition's cooldown at the
/// moment of their choosing (after a successful effect, at half strength on
/// a partial effect, not at all on a miss).
///
/// [`InteractionHandler::execute`]: crate::InteractionHandler::execute
pub struct HostContext<'a> {
    /// The host's cooldown store.
    pub cooldowns: &'a mut dyn CooldownStore,
}

impl HostContext<'_> {
    /// Apply `def`'s cooldown for `(actor, class)`.  A no-op for definitions
    /// without a cooldown.
    pub fn apply_cooldown(&mut self, def: &BehaviorDef, actor: ActorId, class: ObjectClassId) {
        if def.has_cooldown() {
            self.cooldowns.set_cooldown(actor, class, def.cooldown_ticks);
        }
    }

    /// Clear any active cooldown for `(actor, class)`.
    pub fn clear_cooldown(&mut self, actor: ActorId, class: ObjectClassId) {
        self.cooldowns.set_cooldown(actor, class, 0);
    }
}
