//! Actuator-to-action resolution for the Keystone input layer.
//!
//! This crate turns raw actuator updates (keys, mouse buttons, gamepad
//! buttons and axes) into logical, value-bearing actions. It does not own a
//! frame loop, enumerate devices, or persist bindings; a caller feeds it one
//! [`Actuator`] per change and dispatches the returned [`Action`]s.
//!
//! # Core Types
//!
//! - [`ActionMapping`]: Raw many-to-many actuator/action registry
//! - [`Remapper`]: Binding table that resolves updates into scaled actions
//! - [`BindingConfig`]: Serializable binding set, validated once at load time
//! - [`ActionStates`]: Optional press tracking over resolved actions
//!
//! # Usage
//!
//! ```ignore
//! use keystone_input::{keys, Actuator, ActionId, Remapper};
//!
//! let jump = ActionId::game(0)?;
//! let steer = ActionId::game(1)?;
//!
//! let remapper = Remapper::builder()
//!     .bind_range(jump, Actuator::key(keys::SPACE), 0, 32767)
//!     .bind_combo(steer, Actuator::key(keys::A), Actuator::key(keys::D))
//!     .build();
//!
//! let mut frame = Vec::with_capacity(remapper.max_fanout());
//!
//! // In the window event handler
//! fn on_event(remapper: &Remapper, frame: &mut Vec<Action>, event: &WindowEvent) {
//!     if let Some(actuator) = keystone_input::decode::window_event(event) {
//!         remapper.resolve_into(actuator, frame);
//!     }
//! }
//!
//! // In the update loop
//! for action in frame.drain(..) {
//!     match action.id {
//!         id if id == steer => player.steer(action.normalized()),
//!         _ => {}
//!     }
//! }
//! ```
//!
//! # Control Hints
//!
//! UI code pairs the device class of the last actuator with [`glyph`] to
//! label menu actions:
//!
//! ```ignore
//! let hint = keystone_input::glyph(last.source.device_class(), UiAction::MenuConfirm);
//! ```

pub mod buttons;
mod config;
pub mod decode;
mod glyph;
pub mod keys;
mod mapping;
mod remapper;
mod state;

pub use config::{ActuatorRef, BindingConfig, BindingEntry};
pub use glyph::{glyph, write_glyph};
pub use mapping::{ActionMapping, ActionRange};
pub use remapper::{Binding, Remapper, RemapperBuilder};
pub use state::{ActionPhase, ActionStates};

// Re-export the value types every caller needs
pub use keystone_core::{
    Action, ActionId, Actuator, DeviceClass, Error, GameAction, OutputRange, Result, Source,
    UiAction,
};
