//! Logic-tick time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter owned by
//! the host's single logic thread.  Interaction events carry no timestamps of
//! their own: their inter-arrival spacing is not guaranteed uniform (client
//! input rate, network jitter), so everything in this framework that needs a
//! reliable clock — hold-duration accounting, staleness detection — measures
//! against tick counts supplied by the host's tick driver, never against the
//! event stream itself.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute logic-tick counter.
///
/// Stored as `u64` to avoid overflow: at 20 ticks per second (the typical
/// game-server rate) a u64 lasts ~29 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
