//! Unit tests for ix-host.

use ix_core::{ActorId, CooldownStore, Namespace, ObjectClassId, ObjectId, TagStore, Tick,
              TickDriver};

use crate::{IntervalQueue, MemoryCooldownStore, MemoryTagStore};

// ── MemoryTagStore ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tags {
    use super::*;

    #[test]
    fn set_get_remove() {
        let ns = Namespace::from_seed(1);
        let mut store = MemoryTagStore::new();
        store.insert_object(ObjectId(1));

        assert!(!store.has_tag(ObjectId(1), &ns));
        store.set_tag(ObjectId(1), &ns, "charged_bow").unwrap();
        assert!(store.has_tag(ObjectId(1), &ns));
        assert_eq!(store.tag(ObjectId(1), &ns).as_deref(), Some("charged_bow"));

        store.remove_tag(ObjectId(1), &ns).unwrap();
        assert!(!store.has_tag(ObjectId(1), &ns));
        assert!(store.tag(ObjectId(1), &ns).is_none());
    }

    #[test]
    fn set_overwrites() {
        let ns = Namespace::from_seed(1);
        let mut store = MemoryTagStore::new();
        store.insert_object(ObjectId(1));
        store.set_tag(ObjectId(1), &ns, "old").unwrap();
        store.set_tag(ObjectId(1), &ns, "new").unwrap();
        assert_eq!(store.tag(ObjectId(1), &ns).as_deref(), Some("new"));
    }

    #[test]
    fn namespaces_are_independent() {
        let a = Namespace::from_seed(1);
        let b = Namespace::from_seed(2);
        let mut store = MemoryTagStore::new();
        store.insert_object(ObjectId(1));
        store.set_tag(ObjectId(1), &a, "under_a").unwrap();

        assert!(!store.has_tag(ObjectId(1), &b));
        store.set_tag(ObjectId(1), &b, "under_b").unwrap();
        store.remove_tag(ObjectId(1), &b).unwrap();
        assert_eq!(store.tag(ObjectId(1), &a).as_deref(), Some("under_a"));
    }

    #[test]
    fn untaggable_object_rejected() {
        let ns = Namespace::from_seed(1);
        let mut store = MemoryTagStore::new();
        assert!(store.set_tag(ObjectId(9), &ns, "x").is_err());
        assert!(store.remove_tag(ObjectId(9), &ns).is_err());
    }

    #[test]
    fn remove_object_drops_tags() {
        let ns = Namespace::from_seed(1);
        let mut store = MemoryTagStore::new();
        store.insert_object(ObjectId(1));
        store.set_tag(ObjectId(1), &ns, "x").unwrap();
        store.remove_object(ObjectId(1));
        assert!(!store.contains_object(ObjectId(1)));
        assert!(!store.has_tag(ObjectId(1), &ns));
    }
}

// ── MemoryCooldownStore ──────────────────────────────────────────────────────

#[cfg(test)]
mod cooldowns {
    use super::*;

    const ACTOR: ActorId = ActorId(1);
    const CLASS: ObjectClassId = ObjectClassId(7);

    #[test]
    fn set_and_query() {
        let mut store = MemoryCooldownStore::new();
        assert_eq!(store.remaining(ACTOR, CLASS), 0);
        store.set_cooldown(ACTOR, CLASS, 3);
        assert_eq!(store.remaining(ACTOR, CLASS), 3);
        // A different class is unaffected.
        assert_eq!(store.remaining(ACTOR, ObjectClassId(8)), 0);
    }

    #[test]
    fn tick_counts_down_to_zero() {
        let mut store = MemoryCooldownStore::new();
        store.set_cooldown(ACTOR, CLASS, 2);
        store.tick();
        assert_eq!(store.remaining(ACTOR, CLASS), 1);
        store.tick();
        assert_eq!(store.remaining(ACTOR, CLASS), 0);
        assert_eq!(store.active_count(), 0);
        // Ticking with nothing active is harmless.
        store.tick();
    }

    #[test]
    fn set_zero_clears() {
        let mut store = MemoryCooldownStore::new();
        store.set_cooldown(ACTOR, CLASS, 10);
        store.set_cooldown(ACTOR, CLASS, 0);
        assert_eq!(store.remaining(ACTOR, CLASS), 0);
        assert_eq!(store.active_count(), 0);
    }
}

// ── IntervalQueue ────────────────────────────────────────────────────────────

#[cfg(test)]
mod timers {
    use super::*;

    #[test]
    fn fires_on_first_poll_then_every_cadence() {
        let mut driver = IntervalQueue::new();
        let timer = driver.schedule(1);

        assert_eq!(driver.due(Tick(0)), vec![timer]);
        assert_eq!(driver.due(Tick(1)), vec![timer]);
        assert_eq!(driver.due(Tick(2)), vec![timer]);
    }

    #[test]
    fn cadence_spacing() {
        let mut driver = IntervalQueue::new();
        let timer = driver.schedule(3);

        assert_eq!(driver.due(Tick(0)), vec![timer]);
        assert!(driver.due(Tick(1)).is_empty());
        assert!(driver.due(Tick(2)).is_empty());
        assert_eq!(driver.due(Tick(3)), vec![timer]);
        assert_eq!(driver.due(Tick(6)), vec![timer]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut driver = IntervalQueue::new();
        let timer = driver.schedule(1);
        assert_eq!(driver.due(Tick(0)), vec![timer]);

        driver.cancel(timer);
        assert!(driver.due(Tick(1)).is_empty());
        assert!(driver.is_empty());
    }

    #[test]
    fn cancel_before_first_fire() {
        let mut driver = IntervalQueue::new();
        let timer = driver.schedule(1);
        driver.cancel(timer);
        assert!(driver.due(Tick(0)).is_empty());
    }

    #[test]
    fn skipped_ticks_fire_once() {
        let mut driver = IntervalQueue::new();
        let timer = driver.schedule(1);
        assert_eq!(driver.due(Tick(0)), vec![timer]);
        // Host jumps from tick 0 to tick 5: one fire, not five.
        assert_eq!(driver.due(Tick(5)), vec![timer]);
        assert_eq!(driver.due(Tick(6)), vec![timer]);
    }

    #[test]
    fn multiple_timers_in_registration_order() {
        let mut driver = IntervalQueue::new();
        let a = driver.schedule(1);
        let b = driver.schedule(1);
        let c = driver.schedule(1);
        driver.cancel(b);

        assert_eq!(driver.due(Tick(0)), vec![a, c]);
        assert_eq!(driver.due(Tick(1)), vec![a, c]);
        assert_eq!(driver.len(), 2);
    }

    #[test]
    fn zero_cadence_clamped_to_one() {
        let mut driver = IntervalQueue::new();
        let timer = driver.schedule(0);
        assert_eq!(driver.due(Tick(0)), vec![timer]);
        assert_eq!(driver.due(Tick(1)), vec![timer]);
    }
}
