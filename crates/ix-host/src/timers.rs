//! `IntervalQueue` — a polled [`TickDriver`] over a sparse due-tick queue.
//!
//! # Why this shape
//!
//! Most ticks, most timers are not due (and with cadence 1 they all are, but
//! hold sessions are rare relative to ticks).  Keying the queue by due tick
//! means each [`due`](IntervalQueue::due) call does O(log W) `BTreeMap` work
//! plus O(fired) re-arming, where W is the number of distinct future due
//! ticks — never a scan of all registered timers.
//!
//! Cancellation is lazy: `cancel` only drops the cadence entry, and queue
//! entries for dead timers are skipped (and discarded) when their tick
//! drains.  That keeps `cancel` O(1) without a queue search.
//!
//! [`TickDriver`]: ix_core::TickDriver

use std::collections::BTreeMap;

use ix_core::{Tick, TickDriver, TimerId};
use rustc_hash::FxHashMap;

/// A [`TickDriver`] implementation on plain collections.
///
/// Satisfies the trait contract: a timer scheduled between two `due` calls
/// first fires on the next `due` call (zero delay), then re-arms every
/// cadence; cancelled timers never fire.
#[derive(Default)]
pub struct IntervalQueue {
    next_id: u32,
    /// Live timers and their cadence.  Absence means cancelled.
    cadences: FxHashMap<TimerId, u64>,
    /// Due tick → timers re-armed for that tick.
    queue: BTreeMap<Tick, Vec<TimerId>>,
    /// Timers scheduled since the last poll; they fire on the next one.
    fresh: Vec<TimerId>,
}

impl IntervalQueue {
    pub fn new() -> IntervalQueue {
        IntervalQueue::default()
    }

    /// Number of live (scheduled, not cancelled) timers.
    pub fn len(&self) -> usize {
        self.cadences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cadences.is_empty()
    }
}

impl TickDriver for IntervalQueue {
    fn schedule(&mut self, cadence_ticks: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.cadences.insert(id, cadence_ticks.max(1));
        self.fresh.push(id);
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.cadences.remove(&timer);
    }

    fn due(&mut self, now: Tick) -> Vec<TimerId> {
        let mut fired: Vec<TimerId> = Vec::new();

        // Drain every queued tick at or before `now`.  A timer whose due
        // tick was skipped (host jumped ticks) fires once, not once per
        // missed tick.
        let drained: Vec<Tick> = self.queue.range(..=now).map(|(tick, _)| *tick).collect();
        for tick in drained {
            if let Some(timers) = self.queue.remove(&tick) {
                fired.extend(timers.into_iter().filter(|t| self.cadences.contains_key(t)));
            }
        }

        // Freshly scheduled timers fire on their first poll.
        fired.extend(
            std::mem::take(&mut self.fresh)
                .into_iter()
                .filter(|t| self.cadences.contains_key(t)),
        );

        // Ascending registration order, one fire per timer per poll.
        fired.sort_unstable();
        fired.dedup();

        for &timer in &fired {
            if let Some(&cadence) = self.cadences.get(&timer) {
                self.queue.entry(now + cadence).or_default().push(timer);
            }
        }
        fired
    }
}
