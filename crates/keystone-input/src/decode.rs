//! Decoding of winit window events into actuator updates.

use keystone_core::constants::FULL_SCALE;
use keystone_core::{Actuator, Source};
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::buttons::mouse;
use crate::keys;

const fn reading(state: ElementState) -> i16 {
    match state {
        ElementState::Pressed => FULL_SCALE,
        ElementState::Released => 0,
    }
}

/// Actuator update for a physical key changing state.
///
/// Returns `None` for keys without a stable code.
#[must_use]
pub fn key(physical_key: PhysicalKey, state: ElementState) -> Option<Actuator> {
    let PhysicalKey::Code(key_code) = physical_key else {
        return None;
    };
    let code = keys::from_key_code(key_code)?;
    Some(Actuator::new(Source::Keyboard, code, reading(state)))
}

/// Actuator update for a key event.
///
/// Auto-repeat events carry no change and yield `None`.
#[must_use]
pub fn key_event(event: &KeyEvent) -> Option<Actuator> {
    if event.repeat {
        return None;
    }
    key(event.physical_key, event.state)
}

/// Actuator update for a mouse button changing state.
#[must_use]
pub fn mouse_button(button: MouseButton, state: ElementState) -> Option<Actuator> {
    let code = match button {
        MouseButton::Left => mouse::LEFT,
        MouseButton::Right => mouse::RIGHT,
        MouseButton::Middle => mouse::MIDDLE,
        MouseButton::Back => mouse::BACK,
        MouseButton::Forward => mouse::FORWARD,
        MouseButton::Other(index) => index.checked_add(mouse::OTHER_BASE)?,
    };
    Some(Actuator::new(Source::Mouse, code, reading(state)))
}

/// Actuator update carried by a window event, if any.
///
/// Only key and mouse button changes produce actuators; cursor motion,
/// scrolling and text input are left to other layers.
#[must_use]
pub fn window_event(event: &WindowEvent) -> Option<Actuator> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => key_event(event),
        WindowEvent::MouseInput { button, state, .. } => mouse_button(*button, *state),
        _ => None,
    }
}
