//! Control hint glyphs for UI actions.
//!
//! The active device class is passed in by the caller; nothing here reads
//! global input state.

use keystone_core::{DeviceClass, UiAction};

/// Printable hint for `action` on `device`, e.g. `"[Enter]"`.
///
/// Returns an empty string when the device class has no glyph for the
/// action.
#[must_use]
pub const fn glyph(device: DeviceClass, action: UiAction) -> &'static str {
    match device {
        DeviceClass::Keyboard => match action {
            UiAction::MenuUp => "[Up]",
            UiAction::MenuDown => "[Down]",
            UiAction::MenuLeft => "[Left]",
            UiAction::MenuRight => "[Right]",
            UiAction::MenuApply => "[Space]",
            UiAction::MenuConfirm => "[Enter]",
            UiAction::MenuCancel => "[Esc]",
        },
        DeviceClass::Mouse => match action {
            UiAction::MenuConfirm => "[LMB]",
            UiAction::MenuCancel => "[RMB]",
            _ => "",
        },
        DeviceClass::Gamepad => match action {
            UiAction::MenuUp => "(D-Up)",
            UiAction::MenuDown => "(D-Down)",
            UiAction::MenuLeft => "(D-Left)",
            UiAction::MenuRight => "(D-Right)",
            UiAction::MenuApply => "(X)",
            UiAction::MenuConfirm => "(A)",
            UiAction::MenuCancel => "(B)",
        },
    }
}

/// Append the hint for `action` to `out`. Returns the number of bytes written.
pub fn write_glyph(device: DeviceClass, action: UiAction, out: &mut String) -> usize {
    let glyph = glyph(device, action);
    out.push_str(glyph);
    glyph.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_glyphs() {
        assert_eq!(glyph(DeviceClass::Keyboard, UiAction::MenuConfirm), "[Enter]");
        assert_eq!(glyph(DeviceClass::Keyboard, UiAction::MenuCancel), "[Esc]");
        assert_eq!(glyph(DeviceClass::Keyboard, UiAction::MenuApply), "[Space]");
    }

    #[test]
    fn every_action_has_a_keyboard_and_gamepad_glyph() {
        for action in UiAction::ALL {
            assert!(!glyph(DeviceClass::Keyboard, action).is_empty());
            assert!(!glyph(DeviceClass::Gamepad, action).is_empty());
        }
    }

    #[test]
    fn missing_glyph_is_empty() {
        assert_eq!(glyph(DeviceClass::Mouse, UiAction::MenuUp), "");

        let mut hint = String::from("Move ");
        assert_eq!(write_glyph(DeviceClass::Mouse, UiAction::MenuUp, &mut hint), 0);
        assert_eq!(hint, "Move ");
    }

    #[test]
    fn write_appends() {
        let mut hint = String::new();
        let written = write_glyph(DeviceClass::Gamepad, UiAction::MenuConfirm, &mut hint);
        assert_eq!(written, 3);
        assert_eq!(hint, "(A)");
    }
}
