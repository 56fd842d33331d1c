//! Tag-namespace tokens.
//!
//! A registry stores its key on objects under a namespace generated once at
//! registry construction and stable for the registry's lifetime.  Random
//! generation keeps two registries (two plugins, two subsystems) from ever
//! colliding in a shared tag store without any central coordination.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// An opaque tag-namespace token.
///
/// Compared by value; the textual form is what a [`TagStore`] implementation
/// persists alongside the tag entry.
///
/// [`TagStore`]: crate::TagStore
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace(String);

impl Namespace {
    /// Generate a fresh random namespace token.
    pub fn generate() -> Namespace {
        Namespace::from_rng(&mut SmallRng::from_entropy())
    }

    /// Generate deterministically from a seed.  Two registries built from the
    /// same seed share a namespace — useful for tests and for hosts that need
    /// tags written in a previous run to stay resolvable.
    pub fn from_seed(seed: u64) -> Namespace {
        Namespace::from_rng(&mut SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: &mut SmallRng) -> Namespace {
        Namespace(format!("ix-{:032x}", rng.r#gen::<u128>()))
    }

    /// The persisted textual form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
