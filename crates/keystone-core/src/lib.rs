//! Core value types for the Keystone input layer.
//!
//! This crate provides the leaf types shared by every other crate:
//! - [`Actuator`]: a physical input source plus its instantaneous reading
//! - [`Action`]: a logical, engine-level effect plus its resolved magnitude
//! - Scaling helpers that map native readings onto binding output ranges
//! - Common error types

pub mod action;
pub mod actuator;
pub mod error;
pub mod scale;

pub use action::{Action, ActionId, GameAction, UiAction};
pub use actuator::{Actuator, DeviceClass, Source};
pub use error::{Error, Result};
pub use scale::OutputRange;

/// Engine-wide constants
pub mod constants {
    /// Full-scale reading of a digital actuator (key or button held down)
    pub const FULL_SCALE: i16 = i16::MAX;
    /// Lowest reading an analog axis can report
    pub const AXIS_MIN: i16 = i16::MIN;
    /// Highest reading an analog axis can report
    pub const AXIS_MAX: i16 = i16::MAX;
    /// Default symmetric range of a combo axis binding
    pub const COMBO_MIN: i16 = -i16::MAX;
    /// Default symmetric range of a combo axis binding
    pub const COMBO_MAX: i16 = i16::MAX;
}
