//! Combo-aware resolution of actuator updates into scaled actions.

use hashbrown::HashMap;
use keystone_core::constants::{COMBO_MAX, COMBO_MIN};
use keystone_core::{Action, ActionId, Actuator, OutputRange};

use crate::mapping::{ActionMapping, ActionRange};

/// A configured rule mapping one or two actuators to one action.
///
/// When `min_actuator == max_actuator` the binding is a direct passthrough
/// and `range` is that actuator's output range. Otherwise the two actuators
/// drive opposite ends of a combo axis: full activation of `min_actuator`
/// yields `range.min`, full activation of `max_actuator` yields `range.max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Action to emit.
    pub action: ActionId,
    /// Actuator driving the `range.min` end.
    pub min_actuator: Actuator,
    /// Actuator driving the `range.max` end.
    pub max_actuator: Actuator,
    /// Output endpoints.
    pub range: OutputRange,
}

impl Binding {
    /// Direct binding with an explicit output range.
    #[must_use]
    pub fn direct(action: ActionId, actuator: Actuator, range: OutputRange) -> Self {
        let actuator = actuator.released();
        Self {
            action,
            min_actuator: actuator,
            max_actuator: actuator,
            range,
        }
    }

    /// Combo binding with an explicit output range.
    #[must_use]
    pub fn combo(
        action: ActionId,
        min_actuator: Actuator,
        max_actuator: Actuator,
        range: OutputRange,
    ) -> Self {
        Self {
            action,
            min_actuator: min_actuator.released(),
            max_actuator: max_actuator.released(),
            range,
        }
    }

    /// Returns `true` if both roles are held by the same actuator.
    #[inline]
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.min_actuator == self.max_actuator
    }

    /// Resolve a reading of `actuator` against this binding.
    ///
    /// Returns `None` if `actuator` plays no role here.
    #[inline]
    #[must_use]
    pub fn resolve(&self, actuator: Actuator) -> Option<Action> {
        let value = if self.is_direct() {
            if actuator != self.min_actuator {
                return None;
            }
            self.range.map_direct(actuator)
        } else if actuator == self.min_actuator {
            self.range.map_toward(actuator, self.range.min)
        } else if actuator == self.max_actuator {
            self.range.map_toward(actuator, self.range.max)
        } else {
            return None;
        };
        Some(Action::new(self.action, value))
    }
}

/// Binding table that turns actuator updates into resolved actions.
///
/// Configuration (`add*`, [`remove_action`](Self::remove_action),
/// [`clear`](Self::clear)) takes `&mut self`; resolution takes `&self` and
/// never mutates anything, so the borrow checker enforces the
/// configure-then-resolve contract.
///
/// # Usage
///
/// ```ignore
/// let mut remapper = Remapper::new();
/// remapper.add_range(JUMP, Actuator::key(keys::SPACE), 0, 32767);
/// remapper.add_combo(STEER, Actuator::key(keys::A), Actuator::key(keys::D));
///
/// let mut frame = Vec::with_capacity(remapper.max_fanout());
/// for actuator in changed_this_frame {
///     frame.clear();
///     remapper.resolve_into(actuator, &mut frame);
///     dispatch(&frame);
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct Remapper {
    /// Bindings in registration order.
    bindings: Vec<Binding>,
    /// Binding indices per actuator, ascending.
    index: HashMap<Actuator, Vec<usize>>,
    /// Raw candidate associations.
    mapping: ActionMapping,
    /// Largest number of bindings any single actuator takes part in.
    max_fanout: usize,
}

impl Remapper {
    /// Create an empty remapper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a remapper with a builder pattern.
    #[must_use]
    pub fn builder() -> RemapperBuilder {
        RemapperBuilder::new()
    }

    /// Direct binding over the actuator's native range.
    pub fn add(&mut self, action: ActionId, actuator: Actuator) {
        self.push(Binding::direct(action, actuator, OutputRange::native(actuator)));
    }

    /// Direct binding onto `[min_f, max_f]`.
    ///
    /// Lets a digital actuator act as an arbitrary range, e.g. a button as a
    /// half axis with `min_f = 0, max_f = -32767`.
    pub fn add_range(&mut self, action: ActionId, actuator: Actuator, min_f: i16, max_f: i16) {
        self.push(Binding::direct(
            action,
            actuator,
            OutputRange::new(min_f, max_f),
        ));
    }

    /// Combo axis over the default symmetric range `[-32767, 32767]`.
    pub fn add_combo(&mut self, action: ActionId, min_actuator: Actuator, max_actuator: Actuator) {
        self.add_combo_range(action, min_actuator, max_actuator, COMBO_MIN, COMBO_MAX);
    }

    /// Combo axis onto `[min_f, max_f]`.
    ///
    /// Passing the same actuator twice registers a direct binding.
    pub fn add_combo_range(
        &mut self,
        action: ActionId,
        min_actuator: Actuator,
        max_actuator: Actuator,
        min_f: i16,
        max_f: i16,
    ) {
        self.push(Binding::combo(
            action,
            min_actuator,
            max_actuator,
            OutputRange::new(min_f, max_f),
        ));
    }

    /// Append a prepared binding.
    pub fn push(&mut self, binding: Binding) {
        let slot = self.bindings.len();
        self.index_binding(slot, &binding);
        tracing::debug!(
            action = %binding.action,
            min = ?binding.min_actuator.id(),
            max = ?binding.max_actuator.id(),
            range_min = binding.range.min,
            range_max = binding.range.max,
            "binding added"
        );
        self.bindings.push(binding);
    }

    fn index_binding(&mut self, slot: usize, binding: &Binding) {
        let mut roles = [Some(binding.min_actuator), Some(binding.max_actuator)];
        if binding.is_direct() {
            roles[1] = None;
        }
        for actuator in roles.into_iter().flatten() {
            let slots = self.index.entry(actuator).or_default();
            slots.push(slot);
            self.max_fanout = self.max_fanout.max(slots.len());
            self.mapping.register_action(binding.action, actuator);
        }
    }

    /// Remove every binding that emits `action`. Returns how many were removed.
    pub fn remove_action(&mut self, action: ActionId) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.action != action);
        let removed = before - self.bindings.len();
        if removed > 0 {
            self.reindex();
            tracing::debug!(action = %action, removed, "bindings removed");
        }
        removed
    }

    fn reindex(&mut self) {
        self.index.clear();
        self.mapping.clear();
        self.max_fanout = 0;
        let bindings = std::mem::take(&mut self.bindings);
        for (slot, binding) in bindings.iter().enumerate() {
            self.index_binding(slot, binding);
        }
        self.bindings = bindings;
    }

    /// Remove all bindings.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.index.clear();
        self.mapping.clear();
        self.max_fanout = 0;
    }

    /// Bindings in registration order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no bindings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Upper bound on the actions a single call to
    /// [`resolve_into`](Self::resolve_into) can append.
    #[must_use]
    pub const fn max_fanout(&self) -> usize {
        self.max_fanout
    }

    /// Raw actuator-to-action associations behind the bindings.
    #[must_use]
    pub const fn mapping(&self) -> &ActionMapping {
        &self.mapping
    }

    /// Actions `actuator` could trigger, without computing values.
    #[must_use]
    pub fn candidates(&self, actuator: Actuator) -> ActionRange<'_> {
        self.mapping.resolve(actuator)
    }

    /// Resolve one actuator update, appending one action per matching
    /// binding to `out` in registration order.
    ///
    /// `out` is not cleared. Nothing is allocated once `out` has capacity
    /// for [`max_fanout`](Self::max_fanout) more entries.
    #[cfg_attr(
        feature = "profiling",
        tracing::instrument(level = "trace", skip_all)
    )]
    pub fn resolve_into(&self, actuator: Actuator, out: &mut Vec<Action>) {
        let Some(slots) = self.index.get(&actuator) else {
            return;
        };
        out.extend(
            slots
                .iter()
                .filter_map(|&slot| self.bindings[slot].resolve(actuator)),
        );
    }

    /// Resolve one actuator update into a fresh vector.
    #[must_use]
    pub fn update_and_resolve(&self, actuator: Actuator) -> Vec<Action> {
        let mut out = Vec::new();
        self.resolve_into(actuator, &mut out);
        out
    }

    /// Resolve several updates from the same frame.
    ///
    /// Actuators are applied in iteration order and their actions are
    /// appended in that order, so the caller's arrival order decides how
    /// overlapping combo bindings interleave.
    pub fn resolve_batch<I>(&self, actuators: I, out: &mut Vec<Action>)
    where
        I: IntoIterator<Item = Actuator>,
    {
        for actuator in actuators {
            self.resolve_into(actuator, out);
        }
    }
}

/// Builder for creating a remapper with a fluent API.
#[derive(Debug, Default)]
pub struct RemapperBuilder {
    remapper: Remapper,
}

impl RemapperBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a direct binding over the native range.
    #[must_use]
    pub fn bind(mut self, action: impl Into<ActionId>, actuator: Actuator) -> Self {
        self.remapper.add(action.into(), actuator);
        self
    }

    /// Add a direct binding onto `[min_f, max_f]`.
    #[must_use]
    pub fn bind_range(
        mut self,
        action: impl Into<ActionId>,
        actuator: Actuator,
        min_f: i16,
        max_f: i16,
    ) -> Self {
        self.remapper.add_range(action.into(), actuator, min_f, max_f);
        self
    }

    /// Add a combo axis over the default symmetric range.
    #[must_use]
    pub fn bind_combo(
        mut self,
        action: impl Into<ActionId>,
        min_actuator: Actuator,
        max_actuator: Actuator,
    ) -> Self {
        self.remapper.add_combo(action.into(), min_actuator, max_actuator);
        self
    }

    /// Add a combo axis onto `[min_f, max_f]`.
    #[must_use]
    pub fn bind_combo_range(
        mut self,
        action: impl Into<ActionId>,
        min_actuator: Actuator,
        max_actuator: Actuator,
        min_f: i16,
        max_f: i16,
    ) -> Self {
        self.remapper
            .add_combo_range(action.into(), min_actuator, max_actuator, min_f, max_f);
        self
    }

    /// Build the remapper.
    #[must_use]
    pub fn build(self) -> Remapper {
        self.remapper
    }
}
