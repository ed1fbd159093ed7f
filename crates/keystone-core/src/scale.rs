//! Scaling of actuator readings onto binding output ranges.

use serde::{Deserialize, Serialize};

use crate::actuator::Actuator;
use crate::constants::FULL_SCALE;

/// Output endpoints of a binding.
///
/// `min` is the value emitted when the min-role actuator is fully engaged,
/// `max` the value for the max-role actuator. The endpoints may be given in
/// either order; a resolved value always lies between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputRange {
    pub min: i16,
    pub max: i16,
}

impl OutputRange {
    /// Create an output range.
    #[inline]
    #[must_use]
    pub const fn new(min: i16, max: i16) -> Self {
        Self { min, max }
    }

    /// The native range of an actuator's source, used when a binding
    /// passes readings through unchanged.
    #[inline]
    #[must_use]
    pub const fn native(actuator: Actuator) -> Self {
        let (min, max) = actuator.source.native_range();
        Self { min, max }
    }

    /// Smaller endpoint.
    #[inline]
    #[must_use]
    pub const fn lo(self) -> i16 {
        if self.min < self.max {
            self.min
        } else {
            self.max
        }
    }

    /// Larger endpoint.
    #[inline]
    #[must_use]
    pub const fn hi(self) -> i16 {
        if self.min < self.max {
            self.max
        } else {
            self.min
        }
    }

    /// Returns true if both endpoints coincide.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    /// Clamp a widened intermediate into `[lo, hi]`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn clamp(self, value: i64) -> i16 {
        // Both bounds are i16, so the cast is lossless
        value.clamp(i64::from(self.lo()), i64::from(self.hi())) as i16
    }

    /// Linear map of the actuator's clamped reading from its native range
    /// onto `[min, max]`.
    ///
    /// Native minimum maps to `min`, native maximum to `max`.
    #[must_use]
    pub fn map_direct(self, actuator: Actuator) -> i16 {
        let (native_min, native_max) = actuator.source.native_range();
        let offset = i64::from(actuator.clamped_value()) - i64::from(native_min);
        let span_in = i64::from(native_max) - i64::from(native_min);
        let span_out = i64::from(self.max) - i64::from(self.min);
        self.clamp(i64::from(self.min) + offset * span_out / span_in)
    }

    /// Linear map of the actuator's activation magnitude onto `[0, endpoint]`.
    ///
    /// Used for the two roles of a combo axis, where rest is zero and full
    /// activation reaches `endpoint`. The result is still clamped into
    /// `[lo, hi]`, so a range that excludes zero rests at its nearer bound.
    #[must_use]
    pub fn map_toward(self, actuator: Actuator, endpoint: i16) -> i16 {
        let scaled =
            i64::from(endpoint) * i64::from(actuator.magnitude()) / i64::from(FULL_SCALE);
        self.clamp(scaled)
    }
}

impl Default for OutputRange {
    fn default() -> Self {
        Self::new(i16::MIN, i16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_in_either_order() {
        let range = OutputRange::new(100, -100);
        assert_eq!(range.lo(), -100);
        assert_eq!(range.hi(), 100);
        assert_eq!(range.clamp(1_000), 100);
        assert_eq!(range.clamp(-1_000), -100);
    }

    #[test]
    fn direct_key_hits_endpoints() {
        let range = OutputRange::new(0, 32767);
        let space = Actuator::key(44);
        assert_eq!(range.map_direct(space.pressed()), 32767);
        assert_eq!(range.map_direct(space.released()), 0);
    }

    #[test]
    fn direct_button_as_negative_half_axis() {
        let range = OutputRange::new(0, -32767);
        let button = Actuator::gamepad_button(2);
        assert_eq!(range.map_direct(button.pressed()), -32767);
        assert_eq!(range.map_direct(button.released()), 0);
    }

    #[test]
    fn direct_axis_native_is_identity() {
        let axis = Actuator::gamepad_axis(0);
        let range = OutputRange::native(axis);
        for value in [i16::MIN, -12_345, -1, 0, 1, 9_999, i16::MAX] {
            assert_eq!(range.map_direct(axis.with_value(value)), value);
        }
    }

    #[test]
    fn direct_axis_onto_narrow_range() {
        let range = OutputRange::new(-100, 100);
        let axis = Actuator::gamepad_axis(1);
        assert_eq!(range.map_direct(axis.with_value(i16::MIN)), -100);
        assert_eq!(range.map_direct(axis.with_value(i16::MAX)), 100);
        assert_eq!(range.map_direct(axis.with_value(0)), 0);
    }

    #[test]
    fn out_of_range_input_is_clamped_first() {
        let range = OutputRange::new(0, 1000);
        let key = Actuator::key(4).with_value(-5000);
        assert_eq!(range.map_direct(key), 0);
    }

    #[test]
    fn toward_endpoint_scales_from_zero() {
        let range = OutputRange::new(-32767, 32767);
        let key = Actuator::key(4);
        assert_eq!(range.map_toward(key.pressed(), range.min), -32767);
        assert_eq!(range.map_toward(key.pressed(), range.max), 32767);
        assert_eq!(range.map_toward(key.released(), range.min), 0);
        assert_eq!(range.map_toward(key.with_value(16384), range.max), 16384);
    }

    #[test]
    fn toward_endpoint_rests_inside_range() {
        let range = OutputRange::new(10, 100);
        let key = Actuator::key(4);
        assert_eq!(range.map_toward(key.released(), range.max), 10);
        assert_eq!(range.map_toward(key.pressed(), range.max), 100);
    }
}
