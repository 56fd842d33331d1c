//! Discrete interaction action kinds and compact sets of them.
//!
//! A behavior definition names the set of action kinds that trigger it.
//! Sets are a `u8` bitmask rather than a `HashSet<ActionKind>`: membership
//! tests sit on the hot dispatch path and a bitmask makes them branch-free,
//! `const`-constructible, and `Copy`.

use std::fmt;

// ── ActionKind ───────────────────────────────────────────────────────────────

/// One discrete interaction action kind as reported by the host event source.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ActionKind {
    /// Left click while looking at the air.
    LeftClickAir    = 0,
    /// Left click while looking at a block.
    LeftClickBlock  = 1,
    /// Right click while looking at the air.
    RightClickAir   = 2,
    /// Right click while looking at a block.
    RightClickBlock = 3,
    /// Physical contact (stepping on a pressure plate, tripping a wire).
    Physical        = 4,
}

impl ActionKind {
    /// All kinds, in declaration order.  Used by [`ActionSet::iter`].
    pub const ALL: [ActionKind; 5] = [
        ActionKind::LeftClickAir,
        ActionKind::LeftClickBlock,
        ActionKind::RightClickAir,
        ActionKind::RightClickBlock,
        ActionKind::Physical,
    ];

    #[inline(always)]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::LeftClickAir    => "left_click_air",
            ActionKind::LeftClickBlock  => "left_click_block",
            ActionKind::RightClickAir   => "right_click_air",
            ActionKind::RightClickBlock => "right_click_block",
            ActionKind::Physical        => "physical",
        };
        f.write_str(name)
    }
}

// ── ActionSet ────────────────────────────────────────────────────────────────

/// A set of [`ActionKind`]s stored as a bitmask.
///
/// The named constants mirror the comprehension groups hosts usually want
/// ("any click", "any block click", …); arbitrary sets can be built with
/// [`ActionSet::of`], [`ActionSet::with`], or `collect()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSet(u8);

impl ActionSet {
    /// The empty set.  Not a valid trigger set for a behavior definition.
    pub const EMPTY: ActionSet = ActionSet(0);

    /// Left click at a block or at the air.
    pub const LEFT_CLICK: ActionSet =
        ActionSet::of(&[ActionKind::LeftClickAir, ActionKind::LeftClickBlock]);

    /// Right click at a block or at the air.
    pub const RIGHT_CLICK: ActionSet =
        ActionSet::of(&[ActionKind::RightClickAir, ActionKind::RightClickBlock]);

    /// Left or right click at a block or at the air.
    pub const CLICK: ActionSet = ActionSet::LEFT_CLICK.union(ActionSet::RIGHT_CLICK);

    /// Left or right click while looking at a block.
    pub const BLOCK_CLICK: ActionSet =
        ActionSet::of(&[ActionKind::LeftClickBlock, ActionKind::RightClickBlock]);

    /// Left or right click while looking at the air.
    pub const AIR_CLICK: ActionSet =
        ActionSet::of(&[ActionKind::LeftClickAir, ActionKind::RightClickAir]);

    /// Physical contact only.
    pub const PHYSICAL: ActionSet = ActionSet::of(&[ActionKind::Physical]);

    /// Every action kind.
    pub const ALL: ActionSet = ActionSet::CLICK.union(ActionSet::PHYSICAL);

    /// Build a set from a slice of kinds (usable in `const` position).
    pub const fn of(kinds: &[ActionKind]) -> ActionSet {
        let mut bits = 0u8;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        ActionSet(bits)
    }

    /// `self` plus one more kind.
    #[inline]
    pub const fn with(self, kind: ActionKind) -> ActionSet {
        ActionSet(self.0 | kind.bit())
    }

    /// Set union.
    #[inline]
    pub const fn union(self, other: ActionSet) -> ActionSet {
        ActionSet(self.0 | other.0)
    }

    /// Membership test — one AND on the dispatch hot path.
    #[inline]
    pub const fn contains(self, kind: ActionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Number of kinds in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the member kinds in declaration order.
    pub fn iter(self) -> impl Iterator<Item = ActionKind> {
        ActionKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl FromIterator<ActionKind> for ActionSet {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        iter.into_iter().fold(ActionSet::EMPTY, ActionSet::with)
    }
}

impl From<ActionKind> for ActionSet {
    fn from(kind: ActionKind) -> Self {
        ActionSet::EMPTY.with(kind)
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, kind) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}")?;
        }
        f.write_str("}")
    }
}
