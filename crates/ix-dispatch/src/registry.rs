//! `Registry` — the key → behavior definition map.

use ix_behavior::{BehaviorDef, DefError, DefResult, Handler, HoldHandler, InteractionHandler};
use ix_core::{IxResult, Namespace, ObjectId, TagStore};
use rustc_hash::FxHashMap;

// ── Entry ────────────────────────────────────────────────────────────────────

/// One registered behavior: its definition plus its handler.
#[derive(Clone, Debug)]
pub struct Entry {
    def:     BehaviorDef,
    handler: Handler,
}

impl Entry {
    #[inline]
    pub fn def(&self) -> &BehaviorDef {
        &self.def
    }

    #[inline]
    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Maps opaque string keys to registered behaviors and owns the tag
/// [`Namespace`] under which those keys are persisted on objects.
///
/// Lookup absence is never an error — an unknown key simply means "no
/// behavior" and the dispatcher ignores the event.
///
/// # Re-registration and removal
///
/// `register` overwrites: the most recent registration for a key wins on the
/// next lookup.  Hold sessions that are already in flight when their key is
/// overwritten or [`unregister`](Registry::unregister)ed keep running to
/// completion or cancellation — each session owns a clone of its handler, so
/// removing the registry entry never strands it.  (Hosts that want the other
/// policy can cancel sessions explicitly via
/// [`HoldTracker::cancel`](crate::HoldTracker::cancel).)
pub struct Registry {
    namespace: Namespace,
    entries:   FxHashMap<String, Entry>,
}

impl Registry {
    /// A registry with a freshly generated random namespace.
    pub fn new() -> Registry {
        Registry::with_namespace(Namespace::generate())
    }

    /// A registry with a caller-supplied namespace — for deterministic tests
    /// and for hosts whose tag store outlives the process.
    pub fn with_namespace(namespace: Namespace) -> Registry {
        Registry {
            namespace,
            entries: FxHashMap::default(),
        }
    }

    /// The namespace this registry's keys are stored under.  Stable for the
    /// registry's lifetime.
    #[inline]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register (or overwrite) the behavior for `def.key`.
    ///
    /// # Errors
    /// [`DefError::HandlerMismatch`] if the definition and handler disagree
    /// about the dispatch path (hold duration present vs. handler variant).
    pub fn register(&mut self, def: BehaviorDef, handler: Handler) -> DefResult<()> {
        if def.is_hold() != handler.is_hold() {
            return Err(DefError::HandlerMismatch {
                key:          def.key,
                hold_def:     def.hold_duration_ticks.is_some(),
                hold_handler: handler.is_hold(),
            });
        }
        self.entries.insert(def.key.clone(), Entry { def, handler });
        Ok(())
    }

    /// Register a one-shot behavior.
    pub fn register_direct(
        &mut self,
        def:     BehaviorDef,
        handler: impl InteractionHandler,
    ) -> DefResult<()> {
        self.register(def, Handler::direct(handler))
    }

    /// Register a hold-down behavior.
    pub fn register_hold(&mut self, def: BehaviorDef, handler: impl HoldHandler) -> DefResult<()> {
        self.register(def, Handler::hold(handler))
    }

    /// Remove the behavior for `key`.  Returns whether an entry was present.
    pub fn unregister(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The most recently registered behavior for `key`, if any.
    #[inline]
    pub fn lookup(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// All registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Tag plumbing ──────────────────────────────────────────────────────

    /// Write `key` onto `object` under this registry's namespace, making the
    /// object trigger that behavior on interaction.
    ///
    /// The key does not need to be registered yet — dispatch treats an
    /// unresolvable key as "no behavior", so tagging ahead of registration
    /// is harmless.
    ///
    /// # Errors
    /// Whatever the tag store rejects, typically
    /// [`IxError::TagRejected`](ix_core::IxError::TagRejected) for an object
    /// that cannot carry tags.
    pub fn attach(&self, tags: &mut dyn TagStore, object: ObjectId, key: &str) -> IxResult<()> {
        tags.set_tag(object, &self.namespace, key)
    }

    /// Remove this registry's tag from `object`.
    pub fn detach(&self, tags: &mut dyn TagStore, object: ObjectId) -> IxResult<()> {
        tags.remove_tag(object, &self.namespace)
    }

    /// The behavior key currently stored on `object`, if any.
    pub fn resolve(&self, tags: &dyn TagStore, object: ObjectId) -> Option<String> {
        tags.tag(object, &self.namespace)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}
