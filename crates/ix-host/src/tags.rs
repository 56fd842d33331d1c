//! In-memory tag store.

use ix_core::{IxError, IxResult, Namespace, ObjectId, TagStore};
use rustc_hash::{FxHashMap, FxHashSet};

/// A [`TagStore`] over plain maps.
///
/// Objects must be inserted before they can carry tags — that models the
/// host-side precondition (an item without metadata, an entity without a
/// data container) and makes the [`IxError::TagRejected`] path testable.
#[derive(Default)]
pub struct MemoryTagStore {
    /// Objects that are allowed to carry tags.
    objects: FxHashSet<ObjectId>,
    /// object → (namespace string → value).
    entries: FxHashMap<ObjectId, FxHashMap<String, String>>,
}

impl MemoryTagStore {
    pub fn new() -> MemoryTagStore {
        MemoryTagStore::default()
    }

    /// Make `object` taggable.  Idempotent.
    pub fn insert_object(&mut self, object: ObjectId) {
        self.objects.insert(object);
    }

    /// Forget `object` and every tag it carried.
    pub fn remove_object(&mut self, object: ObjectId) {
        self.objects.remove(&object);
        self.entries.remove(&object);
    }

    pub fn contains_object(&self, object: ObjectId) -> bool {
        self.objects.contains(&object)
    }
}

impl TagStore for MemoryTagStore {
    fn has_tag(&self, object: ObjectId, namespace: &Namespace) -> bool {
        self.entries
            .get(&object)
            .is_some_and(|tags| tags.contains_key(namespace.as_str()))
    }

    fn tag(&self, object: ObjectId, namespace: &Namespace) -> Option<String> {
        self.entries.get(&object)?.get(namespace.as_str()).cloned()
    }

    fn set_tag(&mut self, object: ObjectId, namespace: &Namespace, value: &str) -> IxResult<()> {
        if !self.objects.contains(&object) {
            return Err(IxError::TagRejected(object));
        }
        self.entries
            .entry(object)
            .or_default()
            .insert(namespace.as_str().to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_tag(&mut self, object: ObjectId, namespace: &Namespace) -> IxResult<()> {
        if !self.objects.contains(&object) {
            return Err(IxError::TagRejected(object));
        }
        if let Some(tags) = self.entries.get_mut(&object) {
            tags.remove(namespace.as_str());
        }
        Ok(())
    }
}
