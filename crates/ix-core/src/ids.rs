//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so hosts
//! can mint IDs from whatever identity scheme they already use (entity
//! indices, hashed UUIDs, …), but callers should prefer the `.index()` helper
//! when indexing into parallel `Vec`s.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the inner max.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of an interacting actor (a player, an NPC, a remote client).
    /// Keys the hold-session map — at most one live session per `ActorId`.
    pub struct ActorId(u32);
}

typed_id! {
    /// Identity of one concrete tagged object instance (an item stack, a
    /// world entity).  `u64` leaves room for hosts that hash wider IDs down.
    pub struct ObjectId(u64);
}

typed_id! {
    /// The object *class* an interaction cooldown attaches to (a material,
    /// an item type).  Cooldowns are per `(ActorId, ObjectClassId)`, never
    /// per object instance.  `u16` keeps cooldown tables compact.
    pub struct ObjectClassId(u16);
}

typed_id! {
    /// Handle to one periodic callback registration in a [`TickDriver`]
    /// implementation.  Allocated by the driver, opaque to everyone else.
    ///
    /// [`TickDriver`]: crate::TickDriver
    pub struct TimerId(u32);
}
