//! Physical input sources.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_MAX, AXIS_MIN, FULL_SCALE};

/// Class of device a signal came from, as far as the UI cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Keyboard,
    Mouse,
    Gamepad,
}

/// Kind of hardware element an actuator code refers to.
///
/// The variant order is the primary sort key of [`Actuator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// A keyboard key, coded by physical position.
    Keyboard,
    /// A mouse button.
    Mouse,
    /// A digital gamepad button.
    GamepadButton,
    /// An analog gamepad axis (stick or trigger).
    GamepadAxis,
}

impl Source {
    /// Device class this source belongs to.
    #[inline]
    #[must_use]
    pub const fn device_class(self) -> DeviceClass {
        match self {
            Self::Keyboard => DeviceClass::Keyboard,
            Self::Mouse => DeviceClass::Mouse,
            Self::GamepadButton | Self::GamepadAxis => DeviceClass::Gamepad,
        }
    }

    /// Returns true if readings are signed analog positions rather than 0 / full scale.
    #[inline]
    #[must_use]
    pub const fn is_analog(self) -> bool {
        matches!(self, Self::GamepadAxis)
    }

    /// Inclusive range of readings this source can legitimately report.
    #[inline]
    #[must_use]
    pub const fn native_range(self) -> (i16, i16) {
        if self.is_analog() {
            (AXIS_MIN, AXIS_MAX)
        } else {
            (0, FULL_SCALE)
        }
    }
}

/// A physical input source and its current reading.
///
/// Identity is `(source, code)`. The `value` is payload: two actuators with
/// different readings compare equal, hash equally, and sort together, so an
/// actuator can key a lookup table regardless of its current state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Actuator {
    /// Device element kind
    pub source: Source,
    /// Device-local identifier (key code, button index, axis index)
    pub code: u16,
    /// Instantaneous reading
    #[serde(default)]
    pub value: i16,
}

impl Actuator {
    /// Create an actuator with an explicit reading.
    #[inline]
    #[must_use]
    pub const fn new(source: Source, code: u16, value: i16) -> Self {
        Self {
            source,
            code,
            value,
        }
    }

    /// Keyboard key at rest.
    #[inline]
    #[must_use]
    pub const fn key(code: u16) -> Self {
        Self::new(Source::Keyboard, code, 0)
    }

    /// Mouse button at rest.
    #[inline]
    #[must_use]
    pub const fn mouse_button(code: u16) -> Self {
        Self::new(Source::Mouse, code, 0)
    }

    /// Gamepad button at rest.
    #[inline]
    #[must_use]
    pub const fn gamepad_button(code: u16) -> Self {
        Self::new(Source::GamepadButton, code, 0)
    }

    /// Gamepad axis centred.
    #[inline]
    #[must_use]
    pub const fn gamepad_axis(code: u16) -> Self {
        Self::new(Source::GamepadAxis, code, 0)
    }

    /// Same actuator with a different reading.
    #[inline]
    #[must_use]
    pub const fn with_value(self, value: i16) -> Self {
        Self::new(self.source, self.code, value)
    }

    /// Same actuator driven to full scale.
    #[inline]
    #[must_use]
    pub const fn pressed(self) -> Self {
        self.with_value(FULL_SCALE)
    }

    /// Same actuator back at rest.
    #[inline]
    #[must_use]
    pub const fn released(self) -> Self {
        self.with_value(0)
    }

    /// The `(source, code)` identity.
    #[inline]
    #[must_use]
    pub const fn id(self) -> (Source, u16) {
        (self.source, self.code)
    }

    /// Reading clamped into the source's native range.
    #[inline]
    #[must_use]
    pub fn clamped_value(self) -> i16 {
        let (min, max) = self.source.native_range();
        self.value.clamp(min, max)
    }

    /// Unsigned activation magnitude in `0..=FULL_SCALE`.
    ///
    /// Digital sources use their clamped reading. Axes use the absolute
    /// deflection, so either half of a stick reported on its own drives a
    /// combo role with the same strength.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> i16 {
        let value = self.clamped_value();
        if self.source.is_analog() {
            // i16::MIN has no positive counterpart
            value.saturating_abs()
        } else {
            value
        }
    }

    /// Activation as a fraction in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn activation(self) -> f32 {
        f32::from(self.magnitude()) / f32::from(FULL_SCALE)
    }
}

impl PartialEq for Actuator {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Actuator {}

impl PartialOrd for Actuator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Actuator {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id())
    }
}

impl Hash for Actuator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
