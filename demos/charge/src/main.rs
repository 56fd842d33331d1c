//! charge — smallest example for the rust_ix interaction framework.
//!
//! One actor, two tagged items.  A "charged bow" must be held (right click
//! re-sampled every tick) for 12 ticks before it fires; a "smoke bomb" goes
//! off on a single click.  Both apply a per-item-class cooldown.  The demo
//! drives a scripted 36-tick timeline through the dispatcher and prints
//! every callback as it lands:
//!
//!   phase 1 (ticks  0–12): full bow charge, released at tick 12
//!   phase 2 (ticks 14–15): smoke bomb, then a click into its cooldown
//!   phase 3 (ticks 24–26): bow charge abandoned, cancelled by timeout

use anyhow::Result;

use ix_behavior::{BehaviorDef, HoldHandler, HostContext, InteractEvent, InteractionHandler};
use ix_core::{ActionKind, ActionSet, ActorId, CooldownStore, Namespace, ObjectClassId, ObjectId,
              Tick};
use ix_dispatch::{DispatchBuilder, DispatchObserver};
use ix_host::{IntervalQueue, MemoryCooldownStore, MemoryTagStore};

// ── Constants ─────────────────────────────────────────────────────────────────

const ARCHER: ActorId = ActorId(1);

const BOW:  ObjectId = ObjectId(100);
const BOMB: ObjectId = ObjectId(200);

const BOW_CLASS:  ObjectClassId = ObjectClassId(1);
const BOMB_CLASS: ObjectClassId = ObjectClassId(2);

const BOW_CHARGE_TICKS:    u64 = 12;
const BOW_COOLDOWN_TICKS:  u64 = 10;
const BOMB_COOLDOWN_TICKS: u64 = 5;

const TOTAL_TICKS: u64 = 36;

// ── Behaviors ─────────────────────────────────────────────────────────────────

struct ChargedBow;

impl InteractionHandler for ChargedBow {
    fn execute(&self, actor: ActorId, _event: &mut InteractEvent, _ctx: &mut HostContext<'_>) {
        println!("      >>> {actor} looses a fully charged arrow!");
    }
}

impl HoldHandler for ChargedBow {
    fn on_tick_check(&self, _actor: ActorId, elapsed: u64, _idle: u64) {
        if elapsed % 4 == 0 {
            println!("      ... drawing ({elapsed}/{BOW_CHARGE_TICKS} ticks)");
        }
    }

    fn on_cancel(&self, actor: ActorId, elapsed: u64, idle: u64) {
        println!("      >>> {actor} relaxes the bow after {elapsed} ticks ({idle} ticks idle)");
    }
}

struct SmokeBomb;

impl InteractionHandler for SmokeBomb {
    fn execute(&self, actor: ActorId, _event: &mut InteractEvent, _ctx: &mut HostContext<'_>) {
        println!("      >>> {actor} throws a smoke bomb — poof!");
    }
}

// ── Console observer ──────────────────────────────────────────────────────────

struct Console;

impl DispatchObserver for Console {
    fn on_cooldown_reject(&mut self, actor: ActorId, _class: ObjectClassId, remaining: u64) {
        println!("      [observer] {actor} rejected: {remaining} cooldown ticks left");
    }

    fn on_session_start(&mut self, actor: ActorId, key: &str) {
        println!("      [observer] {actor} started holding '{key}'");
    }

    fn on_session_cancelled(&mut self, actor: ActorId, key: &str, elapsed: u64, idle: u64) {
        println!(
            "      [observer] {actor} hold of '{key}' timed out (elapsed {elapsed}, idle {idle})"
        );
    }

    fn on_session_satisfied(&mut self, actor: ActorId, key: &str, elapsed: u64) {
        println!("      [observer] {actor} completed '{key}' after {elapsed} ticks");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== charge — rust_ix interaction framework ===");
    println!("Bow charge: {BOW_CHARGE_TICKS} ticks  |  Timeline: {TOTAL_TICKS} ticks");
    println!();

    // 1. Dispatcher over the in-memory host capabilities.
    let mut dispatcher = DispatchBuilder::new(
        MemoryTagStore::new(),
        MemoryCooldownStore::new(),
        IntervalQueue::new(),
    )
    .namespace(Namespace::from_seed(42))
    .observer(Console)
    .build();

    // 2. Register both behaviors.
    dispatcher.register_hold(
        BehaviorDef::builder("charged_bow")
            .actions(ActionSet::RIGHT_CLICK)
            .hold_down(BOW_CHARGE_TICKS)
            .cooldown(BOW_COOLDOWN_TICKS, true)
            .build()?,
        ChargedBow,
    )?;
    dispatcher.register_direct(
        BehaviorDef::builder("smoke_bomb")
            .actions(ActionSet::RIGHT_CLICK)
            .cooldown(BOMB_COOLDOWN_TICKS, true)
            .build()?,
        SmokeBomb,
    )?;

    // 3. Create the two items and tag them with their behavior keys.
    dispatcher.tags.insert_object(BOW);
    dispatcher.tags.insert_object(BOMB);
    dispatcher.attach(BOW, "charged_bow")?;
    dispatcher.attach(BOMB, "smoke_bomb")?;
    println!(
        "Registered {} behaviors under namespace {}",
        dispatcher.registry.len(),
        dispatcher.registry.namespace()
    );
    println!();

    // 4. Scripted input: (tick, item) pairs the actor clicks at.
    let mut samples: Vec<(u64, ObjectId, ObjectClassId)> = Vec::new();
    for t in 0..=BOW_CHARGE_TICKS {
        samples.push((t, BOW, BOW_CLASS)); // phase 1: full charge
    }
    samples.push((14, BOMB, BOMB_CLASS)); // phase 2: bomb …
    samples.push((15, BOMB, BOMB_CLASS)); //          … and a click into its cooldown
    for t in 24..=26 {
        samples.push((t, BOW, BOW_CLASS)); // phase 3: charge begun, then abandoned
    }

    // 5. Tick loop: events first, then the dispatch tick, then host upkeep.
    for now in 0..TOTAL_TICKS {
        for &(_, object, class) in samples.iter().filter(|&&(t, _, _)| t == now) {
            let mut event = InteractEvent::new(ARCHER, object, class, ActionKind::RightClickAir);
            println!("T{now:<3} click on {object}");
            dispatcher.handle_event(&mut event);
            if event.is_cancelled() {
                println!("      (event cancelled — host will not place/use the item)");
            }
        }
        dispatcher.tick(Tick(now));
        dispatcher.cooldowns.tick();
    }

    // 6. Summary.
    println!();
    println!("Timeline complete.");
    println!("  live hold sessions : {}", dispatcher.tracker.session_count());
    println!("  active cooldowns   : {}", dispatcher.cooldowns.active_count());
    println!(
        "  bow cooldown left  : {}",
        dispatcher.cooldowns.remaining(ARCHER, BOW_CLASS)
    );

    Ok(())
}
