//! Behavior definitions and their builder.

use ix_core::ActionSet;

use crate::{DefError, DefResult};

// ── BehaviorDef ──────────────────────────────────────────────────────────────

/// Immutable description of one named interaction behavior.
///
/// A definition is plain data: it carries no handler code and can be cloned,
/// compared, and (with the `serde` feature) loaded from config files.  One
/// instance describes *every* object tagged with its key — nothing in a
/// definition is specific to a single object or actor.
///
/// Build via [`BehaviorDef::builder`].
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorDef {
    /// Unique key identifying the behavior within one registry.  This is the
    /// value the registry writes into the tag store on attached objects.
    pub key: String,

    /// The action kinds that trigger this behavior.  Never empty.
    pub actions: ActionSet,

    /// Whether the host event should remain un-cancelled — i.e. whether the
    /// object may still be placed / the block interaction may still go
    /// through after the behavior runs.
    pub placeable: bool,

    /// Cooldown applied to `(actor, object class)` after the behavior
    /// triggers.  Zero means no cooldown.
    pub cooldown_ticks: u64,

    /// If true, the dispatcher applies the cooldown itself the moment the
    /// behavior triggers.  If false, the handler must apply it explicitly
    /// via [`HostContext::apply_cooldown`].
    ///
    /// [`HostContext::apply_cooldown`]: crate::HostContext::apply_cooldown
    pub cooldown_instant: bool,

    /// Present only for hold-down behaviors: ticks of continuous holding
    /// required before the handler's `execute` fires.
    pub hold_duration_ticks: Option<u64>,
}

impl BehaviorDef {
    /// Start building a definition for `key`.
    pub fn builder(key: impl Into<String>) -> BehaviorDefBuilder {
        BehaviorDefBuilder {
            key:              key.into(),
            actions:          ActionSet::EMPTY,
            placeable:        false,
            cooldown_ticks:   0,
            cooldown_instant: false,
            hold_duration:    None,
        }
    }

    /// Whether this definition takes the hold-tracked dispatch path.
    #[inline]
    pub fn is_hold(&self) -> bool {
        self.hold_duration_ticks.is_some()
    }

    #[inline]
    pub fn has_cooldown(&self) -> bool {
        self.cooldown_ticks > 0
    }
}

// ── BehaviorDefBuilder ───────────────────────────────────────────────────────

/// Fluent builder for [`BehaviorDef`].
///
/// # Defaults
///
/// | Field               | Default         |
/// |---------------------|-----------------|
/// | `placeable`         | `false`         |
/// | `cooldown`          | none            |
/// | `hold_duration`     | none (one-shot) |
///
/// `actions` has no default — an empty trigger set is rejected by
/// [`build`](BehaviorDefBuilder::build).
#[derive(Clone, Debug)]
pub struct BehaviorDefBuilder {
    key:              String,
    actions:          ActionSet,
    placeable:        bool,
    cooldown_ticks:   u64,
    cooldown_instant: bool,
    hold_duration:    Option<u64>,
}

impl BehaviorDefBuilder {
    /// Add `set` to the trigger actions (unions with anything already added).
    pub fn actions(mut self, set: ActionSet) -> Self {
        self.actions = self.actions.union(set);
        self
    }

    /// Whether the host event stays un-cancelled after dispatch.
    pub fn placeable(mut self, placeable: bool) -> Self {
        self.placeable = placeable;
        self
    }

    /// Cooldown of `ticks`; `instant` selects dispatcher-applied vs
    /// handler-applied (see [`BehaviorDef::cooldown_instant`]).
    pub fn cooldown(mut self, ticks: u64, instant: bool) -> Self {
        self.cooldown_ticks = ticks;
        self.cooldown_instant = instant;
        self
    }

    /// Make this a hold-down behavior requiring `duration_ticks` of
    /// continuous holding.
    pub fn hold_down(mut self, duration_ticks: u64) -> Self {
        self.hold_duration = Some(duration_ticks);
        self
    }

    /// Validate and produce the definition.
    ///
    /// # Errors
    /// [`DefError::EmptyKey`] and [`DefError::EmptyActions`].
    pub fn build(self) -> DefResult<BehaviorDef> {
        if self.key.is_empty() {
            return Err(DefError::EmptyKey);
        }
        if self.actions.is_empty() {
            return Err(DefError::EmptyActions { key: self.key });
        }
        Ok(BehaviorDef {
            key:                 self.key,
            actions:             self.actions,
            placeable:           self.placeable,
            cooldown_ticks:      self.cooldown_ticks,
            cooldown_instant:    self.cooldown_instant,
            hold_duration_ticks: self.hold_duration,
        })
    }
}
