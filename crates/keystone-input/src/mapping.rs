//! Raw actuator-to-action association registry.

use std::iter::FusedIterator;
use std::slice;

use keystone_core::{ActionId, Actuator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    actuator: Actuator,
    action: ActionId,
}

/// Many-to-many registry of which actions an actuator could trigger.
///
/// Entries are kept sorted by actuator identity. Equal keys stay in
/// insertion order, so a query returns a contiguous, stable slice found by
/// binary search. The registry knows nothing about scaling; the
/// [`Remapper`](crate::Remapper) layers value resolution on top of it.
#[derive(Debug, Default, Clone)]
pub struct ActionMapping {
    entries: Vec<Entry>,
}

impl ActionMapping {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `actuator` with `action`.
    ///
    /// Duplicate pairs are kept. The new entry goes after every existing
    /// entry with the same key.
    pub fn register_action(&mut self, action: ActionId, actuator: Actuator) {
        let at = self.entries.partition_point(|e| e.actuator <= actuator);
        self.entries.insert(
            at,
            Entry {
                actuator: actuator.released(),
                action,
            },
        );
    }

    /// All actions registered for `actuator`, in insertion order.
    ///
    /// The reading carried by `actuator` is ignored.
    #[must_use]
    pub fn resolve(&self, actuator: Actuator) -> ActionRange<'_> {
        let start = self.entries.partition_point(|e| e.actuator < actuator);
        let len = self.entries[start..].partition_point(|e| e.actuator == actuator);
        ActionRange {
            entries: self.entries[start..start + len].iter(),
        }
    }

    /// All actuators registered for `action`, in actuator order.
    pub fn actuators_for(&self, action: ActionId) -> impl Iterator<Item = Actuator> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.action == action)
            .map(|e| e.actuator)
    }

    /// Remove every entry for `action`. Returns how many were removed.
    pub fn unregister_action(&mut self, action: ActionId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.action != action);
        before - self.entries.len()
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Ordered range of action ids returned by [`ActionMapping::resolve`].
#[derive(Debug, Clone)]
pub struct ActionRange<'a> {
    entries: slice::Iter<'a, Entry>,
}

impl ActionRange<'_> {
    /// Returns `true` if the range holds no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }
}

impl Iterator for ActionRange<'_> {
    type Item = ActionId;

    fn next(&mut self) -> Option<ActionId> {
        self.entries.next().map(|e| e.action)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl DoubleEndedIterator for ActionRange<'_> {
    fn next_back(&mut self) -> Option<ActionId> {
        self.entries.next_back().map(|e| e.action)
    }
}

impl ExactSizeIterator for ActionRange<'_> {}

impl FusedIterator for ActionRange<'_> {}
