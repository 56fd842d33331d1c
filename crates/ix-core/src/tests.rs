//! Unit tests for ix-core.

use crate::{ActionKind, ActionSet, ActorId, Namespace, ObjectClassId, ObjectId, Tick, TimerId};

// ── Tick ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn offset_and_since() {
        let t = Tick(10);
        assert_eq!(t.offset(5), Tick(15));
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(Tick(15) - t, 5);
        assert_eq!(t + 3, Tick(13));
    }

    #[test]
    fn ordering() {
        assert!(Tick::ZERO < Tick(1));
        assert_eq!(Tick::default(), Tick::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

// ── Typed IDs ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ids {
    use super::*;

    #[test]
    fn invalid_sentinel_is_default() {
        assert_eq!(ActorId::default(), ActorId::INVALID);
        assert_eq!(ObjectId::default(), ObjectId::INVALID);
        assert_eq!(ObjectClassId::default(), ObjectClassId::INVALID);
        assert_eq!(TimerId::default(), TimerId::INVALID);
    }

    #[test]
    fn index_round_trip() {
        let id = ActorId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(ActorId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn try_from_out_of_range() {
        assert!(ObjectClassId::try_from(usize::MAX).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(ActorId(3).to_string(), "ActorId(3)");
    }
}

// ── ActionSet ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod action_set {
    use super::*;

    #[test]
    fn named_groups() {
        assert_eq!(ActionSet::LEFT_CLICK.len(), 2);
        assert_eq!(ActionSet::RIGHT_CLICK.len(), 2);
        assert_eq!(ActionSet::CLICK.len(), 4);
        assert_eq!(ActionSet::BLOCK_CLICK.len(), 2);
        assert_eq!(ActionSet::AIR_CLICK.len(), 2);
        assert_eq!(ActionSet::ALL.len(), 5);
        assert!(ActionSet::EMPTY.is_empty());
    }

    #[test]
    fn contains() {
        assert!(ActionSet::RIGHT_CLICK.contains(ActionKind::RightClickAir));
        assert!(ActionSet::RIGHT_CLICK.contains(ActionKind::RightClickBlock));
        assert!(!ActionSet::RIGHT_CLICK.contains(ActionKind::LeftClickAir));
        assert!(!ActionSet::CLICK.contains(ActionKind::Physical));
    }

    #[test]
    fn with_and_union() {
        let set = ActionSet::EMPTY.with(ActionKind::Physical);
        assert_eq!(set, ActionSet::PHYSICAL);
        assert_eq!(
            ActionSet::BLOCK_CLICK.union(ActionSet::AIR_CLICK),
            ActionSet::CLICK
        );
        // Union is idempotent.
        assert_eq!(ActionSet::CLICK.union(ActionSet::CLICK), ActionSet::CLICK);
    }

    #[test]
    fn collect_from_iterator() {
        let set: ActionSet = [ActionKind::LeftClickAir, ActionKind::RightClickAir]
            .into_iter()
            .collect();
        assert_eq!(set, ActionSet::AIR_CLICK);
    }

    #[test]
    fn iter_in_declaration_order() {
        let kinds: Vec<ActionKind> = ActionSet::CLICK.iter().collect();
        assert_eq!(
            kinds,
            vec![
                ActionKind::LeftClickAir,
                ActionKind::LeftClickBlock,
                ActionKind::RightClickAir,
                ActionKind::RightClickBlock,
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(ActionSet::PHYSICAL.to_string(), "{physical}");
        assert_eq!(ActionSet::EMPTY.to_string(), "{}");
    }
}

// ── Namespace ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod namespace {
    use super::*;

    #[test]
    fn seeded_generation_is_deterministic() {
        assert_eq!(Namespace::from_seed(42), Namespace::from_seed(42));
        assert_ne!(Namespace::from_seed(42), Namespace::from_seed(43));
    }

    #[test]
    fn generated_tokens_differ() {
        // Two entropy-seeded tokens colliding would mean a broken RNG.
        assert_ne!(Namespace::generate(), Namespace::generate());
    }

    #[test]
    fn textual_form() {
        let ns = Namespace::from_seed(7);
        assert!(ns.as_str().starts_with("ix-"));
        assert_eq!(ns.as_str().len(), 3 + 32);
        assert_eq!(ns.to_string(), ns.as_str());
    }
}
