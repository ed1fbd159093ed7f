//! Per-action press tracking built from resolved actions.
//!
//! The [`Remapper`](crate::Remapper) is stateless: it reports values, not
//! edges. Consumers that want "just pressed" semantics fold each frame's
//! resolved actions into [`ActionStates`] and call
//! [`end_frame`](ActionStates::end_frame) once the frame is done.

use hashbrown::HashMap;
use keystone_core::constants::FULL_SCALE;
use keystone_core::{Action, ActionId};

/// Press phase of a logical action.
///
/// ```text
/// Released ─activate()─> JustPressed ─end_frame()─> Pressed
///     ^                                               │
///     │                                          deactivate()
///     │                                               v
///     └──────────────end_frame()─────────────── JustReleased
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPhase {
    JustPressed,
    Pressed,
    JustReleased,
    #[default]
    Released,
}

impl ActionPhase {
    /// Returns `true` while active, including the first frame.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// Returns `true` only on the frame the action became active.
    #[inline]
    #[must_use]
    pub const fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    /// Returns `true` only on the frame the action became inactive.
    #[inline]
    #[must_use]
    pub const fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }

    #[inline]
    fn activate(&mut self) {
        if !self.is_pressed() {
            *self = Self::JustPressed;
        }
    }

    #[inline]
    fn deactivate(&mut self) {
        if self.is_pressed() {
            *self = Self::JustReleased;
        }
    }

    #[inline]
    fn end_frame(&mut self) {
        match *self {
            Self::JustPressed => *self = Self::Pressed,
            Self::JustReleased => *self = Self::Released,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tracked {
    phase: ActionPhase,
    value: i16,
}

/// Latest value and press phase of every action seen so far.
#[derive(Debug, Default, Clone)]
pub struct ActionStates {
    actions: HashMap<ActionId, Tracked>,
}

impl ActionStates {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold resolved actions into the tracker, in order.
    ///
    /// A non-zero value activates the action, zero deactivates it. When one
    /// action appears several times the last value wins.
    pub fn apply(&mut self, resolved: &[Action]) {
        for action in resolved {
            let tracked = self.actions.entry(action.id).or_default();
            tracked.value = action.value;
            if action.is_active() {
                tracked.phase.activate();
            } else {
                tracked.phase.deactivate();
            }
        }
    }

    /// Current phase of `id`.
    #[must_use]
    pub fn phase(&self, id: ActionId) -> ActionPhase {
        self.actions.get(&id).map_or(ActionPhase::Released, |t| t.phase)
    }

    /// Returns `true` if the action is currently active.
    #[must_use]
    pub fn is_pressed(&self, id: ActionId) -> bool {
        self.phase(id).is_pressed()
    }

    /// Returns `true` if the action became active this frame.
    #[must_use]
    pub fn is_just_pressed(&self, id: ActionId) -> bool {
        self.phase(id).is_just_pressed()
    }

    /// Returns `true` if the action became inactive this frame.
    #[must_use]
    pub fn is_just_released(&self, id: ActionId) -> bool {
        self.phase(id).is_just_released()
    }

    /// Last resolved value of `id`, zero if never seen.
    #[must_use]
    pub fn value(&self, id: ActionId) -> i16 {
        self.actions.get(&id).map_or(0, |t| t.value)
    }

    /// Last resolved value of `id` in `[-1, 1]`.
    #[must_use]
    pub fn normalized(&self, id: ActionId) -> f32 {
        (f32::from(self.value(id)) / f32::from(FULL_SCALE)).max(-1.0)
    }

    /// Called at end of frame to settle just-pressed/released phases.
    pub fn end_frame(&mut self) {
        for tracked in self.actions.values_mut() {
            tracked.phase.end_frame();
        }
    }

    /// Forget every action.
    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn jump() -> ActionId {
        ActionId::game(0).unwrap()
    }

    #[test]
    fn phase_transitions() {
        let mut states = ActionStates::new();
        assert_eq!(states.phase(jump()), ActionPhase::Released);

        states.apply(&[Action::new(jump(), FULL_SCALE)]);
        assert!(states.is_pressed(jump()));
        assert!(states.is_just_pressed(jump()));

        states.end_frame();
        assert!(states.is_pressed(jump()));
        assert!(!states.is_just_pressed(jump()));

        states.apply(&[Action::new(jump(), 0)]);
        assert!(!states.is_pressed(jump()));
        assert!(states.is_just_released(jump()));

        states.end_frame();
        assert_eq!(states.phase(jump()), ActionPhase::Released);
    }

    #[test]
    fn repeated_activation_keeps_phase() {
        let mut states = ActionStates::new();
        states.apply(&[Action::new(jump(), 100)]);
        states.end_frame();
        states.apply(&[Action::new(jump(), 200)]);
        assert_eq!(states.phase(jump()), ActionPhase::Pressed);
        assert_eq!(states.value(jump()), 200);
    }

    #[test]
    fn last_value_wins() {
        let steer = ActionId::game(1).unwrap();
        let mut states = ActionStates::new();
        states.apply(&[
            Action::new(steer, -FULL_SCALE),
            Action::new(steer, FULL_SCALE / 2),
        ]);
        assert_eq!(states.value(steer), FULL_SCALE / 2);
        assert_relative_eq!(states.normalized(steer), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn unseen_action_is_released() {
        let states = ActionStates::new();
        assert!(!states.is_pressed(jump()));
        assert_eq!(states.value(jump()), 0);
        assert_relative_eq!(states.normalized(jump()), 0.0);
    }

    #[test]
    fn clear_forgets() {
        let mut states = ActionStates::new();
        states.apply(&[Action::new(jump(), 1)]);
        states.clear();
        assert!(!states.is_pressed(jump()));
    }
}
