//! In-memory cooldown store.

use ix_core::{ActorId, CooldownStore, ObjectClassId};
use rustc_hash::FxHashMap;

/// A [`CooldownStore`] of remaining-tick counters.
///
/// The host is responsible for expiry: call [`tick`](MemoryCooldownStore::tick)
/// once per logic tick to count every active cooldown down by one.
#[derive(Default)]
pub struct MemoryCooldownStore {
    remaining: FxHashMap<(ActorId, ObjectClassId), u64>,
}

impl MemoryCooldownStore {
    pub fn new() -> MemoryCooldownStore {
        MemoryCooldownStore::default()
    }

    /// Advance one tick: decrement every active cooldown, dropping the ones
    /// that reach zero.
    pub fn tick(&mut self) {
        self.remaining.retain(|_, ticks| {
            *ticks -= 1;
            *ticks > 0
        });
    }

    /// Number of `(actor, class)` pairs currently on cooldown.
    pub fn active_count(&self) -> usize {
        self.remaining.len()
    }
}

impl CooldownStore for MemoryCooldownStore {
    fn remaining(&self, actor: ActorId, class: ObjectClassId) -> u64 {
        self.remaining.get(&(actor, class)).copied().unwrap_or(0)
    }

    fn set_cooldown(&mut self, actor: ActorId, class: ObjectClassId, ticks: u64) {
        if ticks == 0 {
            self.remaining.remove(&(actor, class));
        } else {
            self.remaining.insert((actor, class), ticks);
        }
    }
}
