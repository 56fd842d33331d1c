//! Fluent builder for constructing a [`Dispatcher`].

use ix_core::{CooldownStore, Namespace, TagStore, TickDriver};

use crate::{DispatchObserver, Dispatcher, HoldTracker, NoopObserver, Registry};

/// Fluent builder for [`Dispatcher<T, C, D, O>`].
///
/// # Required inputs
///
/// The three host capabilities: a [`TagStore`], a [`CooldownStore`], and a
/// [`TickDriver`].
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default                              |
/// |------------------------------|--------------------------------------|
/// | `.sample_tolerance_ticks(n)` | `DEFAULT_SAMPLE_TOLERANCE_TICKS` (5) |
/// | `.namespace(ns)`             | freshly generated random namespace   |
/// | `.observer(o)`               | [`NoopObserver`]                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = DispatchBuilder::new(tags, cooldowns, IntervalQueue::new())
///     .sample_tolerance_ticks(8)
///     .observer(Console)
///     .build();
/// dispatcher.register_hold(def, ChargedBow)?;
/// ```
pub struct DispatchBuilder<T, C, D, O = NoopObserver>
where
    T: TagStore,
    C: CooldownStore,
    D: TickDriver,
    O: DispatchObserver,
{
    tags:      T,
    cooldowns: C,
    driver:    D,
    observer:  O,
    tolerance: Option<u64>,
    namespace: Option<Namespace>,
}

impl<T, C, D> DispatchBuilder<T, C, D, NoopObserver>
where
    T: TagStore,
    C: CooldownStore,
    D: TickDriver,
{
    /// Create a builder with all required inputs.
    pub fn new(tags: T, cooldowns: C, driver: D) -> Self {
        Self {
            tags,
            cooldowns,
            driver,
            observer:  NoopObserver,
            tolerance: None,
            namespace: None,
        }
    }
}

impl<T, C, D, O> DispatchBuilder<T, C, D, O>
where
    T: TagStore,
    C: CooldownStore,
    D: TickDriver,
    O: DispatchObserver,
{
    /// Override the hold tracker's sample tolerance window.
    pub fn sample_tolerance_ticks(mut self, ticks: u64) -> Self {
        self.tolerance = Some(ticks);
        self
    }

    /// Supply the registry's tag namespace instead of generating one — for
    /// deterministic tests and hosts whose tag store outlives the process.
    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Attach an observer for instrumentation hooks.
    pub fn observer<O2: DispatchObserver>(self, observer: O2) -> DispatchBuilder<T, C, D, O2> {
        DispatchBuilder {
            tags:      self.tags,
            cooldowns: self.cooldowns,
            driver:    self.driver,
            observer,
            tolerance: self.tolerance,
            namespace: self.namespace,
        }
    }

    /// Produce a ready-to-run [`Dispatcher`].
    pub fn build(self) -> Dispatcher<T, C, D, O> {
        let registry = match self.namespace {
            Some(ns) => Registry::with_namespace(ns),
            None     => Registry::new(),
        };
        let tracker = match self.tolerance {
            Some(t) => HoldTracker::with_tolerance(t),
            None    => HoldTracker::new(),
        };
        Dispatcher {
            registry,
            tracker,
            tags:      self.tags,
            cooldowns: self.cooldowns,
            driver:    self.driver,
            observer:  self.observer,
        }
    }
}
