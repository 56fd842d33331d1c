//! The raw interaction event consumed by the dispatcher.

use ix_core::{ActionKind, ActorId, ObjectClassId, ObjectId};

/// One discrete interaction event delivered by the host event source.
///
/// The dispatcher's only write access to the host event is the cancellation
/// flag: a cancelled event tells the host to suppress its default handling
/// (placing the object, pressing the block) after dispatch returns.  The
/// flag is sticky across the cooldown check and the `placeable` check —
/// either one may set it, and a handler may [`allow`](InteractEvent::allow)
/// it again if it decides the default behavior should proceed after all.
#[derive(Clone, Debug)]
pub struct InteractEvent {
    /// The actor performing the interaction.
    pub actor: ActorId,

    /// The concrete object interacted with (carries the tag).
    pub object: ObjectId,

    /// The object's class — what cooldowns attach to.
    pub object_class: ObjectClassId,

    /// The discrete action kind the host observed.
    pub action: ActionKind,

    cancelled: bool,
}

impl InteractEvent {
    /// A fresh, un-cancelled event.
    pub fn new(
        actor:        ActorId,
        object:       ObjectId,
        object_class: ObjectClassId,
        action:       ActionKind,
    ) -> Self {
        Self {
            actor,
            object,
            object_class,
            action,
            cancelled: false,
        }
    }

    /// Mark the event cancelled — the host should suppress default handling.
    #[inline]
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Clear the cancellation flag.
    #[inline]
    pub fn allow(&mut self) {
        self.cancelled = false;
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
