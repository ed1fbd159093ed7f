//! Stable mouse and gamepad actuator codes.

/// Mouse button codes.
pub mod mouse {
    pub const LEFT: u16 = 0;
    pub const RIGHT: u16 = 1;
    pub const MIDDLE: u16 = 2;
    pub const BACK: u16 = 3;
    pub const FORWARD: u16 = 4;
    /// Extra buttons reported by index start here.
    pub const OTHER_BASE: u16 = 5;
}

/// Gamepad button codes, laid out like a standard dual-stick controller.
pub mod gamepad {
    /// Bottom face button (A / Cross).
    pub const SOUTH: u16 = 0;
    /// Right face button (B / Circle).
    pub const EAST: u16 = 1;
    /// Left face button (X / Square).
    pub const WEST: u16 = 2;
    /// Top face button (Y / Triangle).
    pub const NORTH: u16 = 3;
    pub const BACK: u16 = 4;
    pub const GUIDE: u16 = 5;
    pub const START: u16 = 6;
    pub const LEFT_STICK: u16 = 7;
    pub const RIGHT_STICK: u16 = 8;
    pub const LEFT_SHOULDER: u16 = 9;
    pub const RIGHT_SHOULDER: u16 = 10;
    pub const DPAD_UP: u16 = 11;
    pub const DPAD_DOWN: u16 = 12;
    pub const DPAD_LEFT: u16 = 13;
    pub const DPAD_RIGHT: u16 = 14;
}

/// Gamepad axis codes.
pub mod axis {
    pub const LEFT_X: u16 = 0;
    pub const LEFT_Y: u16 = 1;
    pub const RIGHT_X: u16 = 2;
    pub const RIGHT_Y: u16 = 3;
    pub const TRIGGER_LEFT: u16 = 4;
    pub const TRIGGER_RIGHT: u16 = 5;
}
