//! Stable keyboard actuator codes.
//!
//! Codes follow USB HID keyboard usage ids, so they are independent of the
//! windowing backend and stable across layouts. Only physical positions are
//! coded; text input is out of scope.

use winit::keyboard::KeyCode;

macro_rules! key_table {
    ($($name:ident = $code:literal, $winit:ident, $label:literal;)*) => {
        $(
            #[doc = concat!("`", $label, "` key.")]
            pub const $name: u16 = $code;
        )*

        /// Code for a winit physical key, if it has one.
        #[must_use]
        pub const fn from_key_code(key: KeyCode) -> Option<u16> {
            match key {
                $(KeyCode::$winit => Some($code),)*
                _ => None,
            }
        }

        /// Printable label of a key code.
        #[must_use]
        pub const fn name(code: u16) -> Option<&'static str> {
            match code {
                $($code => Some($label),)*
                _ => None,
            }
        }
    };
}

key_table! {
    A = 4, KeyA, "A";
    B = 5, KeyB, "B";
    C = 6, KeyC, "C";
    D = 7, KeyD, "D";
    E = 8, KeyE, "E";
    F = 9, KeyF, "F";
    G = 10, KeyG, "G";
    H = 11, KeyH, "H";
    I = 12, KeyI, "I";
    J = 13, KeyJ, "J";
    K = 14, KeyK, "K";
    L = 15, KeyL, "L";
    M = 16, KeyM, "M";
    N = 17, KeyN, "N";
    O = 18, KeyO, "O";
    P = 19, KeyP, "P";
    Q = 20, KeyQ, "Q";
    R = 21, KeyR, "R";
    S = 22, KeyS, "S";
    T = 23, KeyT, "T";
    U = 24, KeyU, "U";
    V = 25, KeyV, "V";
    W = 26, KeyW, "W";
    X = 27, KeyX, "X";
    Y = 28, KeyY, "Y";
    Z = 29, KeyZ, "Z";
    DIGIT1 = 30, Digit1, "1";
    DIGIT2 = 31, Digit2, "2";
    DIGIT3 = 32, Digit3, "3";
    DIGIT4 = 33, Digit4, "4";
    DIGIT5 = 34, Digit5, "5";
    DIGIT6 = 35, Digit6, "6";
    DIGIT7 = 36, Digit7, "7";
    DIGIT8 = 37, Digit8, "8";
    DIGIT9 = 38, Digit9, "9";
    DIGIT0 = 39, Digit0, "0";
    ENTER = 40, Enter, "Enter";
    ESCAPE = 41, Escape, "Esc";
    BACKSPACE = 42, Backspace, "Backspace";
    TAB = 43, Tab, "Tab";
    SPACE = 44, Space, "Space";
    MINUS = 45, Minus, "-";
    EQUAL = 46, Equal, "=";
    BRACKET_LEFT = 47, BracketLeft, "[";
    BRACKET_RIGHT = 48, BracketRight, "]";
    BACKSLASH = 49, Backslash, "\\";
    SEMICOLON = 51, Semicolon, ";";
    QUOTE = 52, Quote, "'";
    BACKQUOTE = 53, Backquote, "`";
    COMMA = 54, Comma, ",";
    PERIOD = 55, Period, ".";
    SLASH = 56, Slash, "/";
    CAPS_LOCK = 57, CapsLock, "Caps";
    F1 = 58, F1, "F1";
    F2 = 59, F2, "F2";
    F3 = 60, F3, "F3";
    F4 = 61, F4, "F4";
    F5 = 62, F5, "F5";
    F6 = 63, F6, "F6";
    F7 = 64, F7, "F7";
    F8 = 65, F8, "F8";
    F9 = 66, F9, "F9";
    F10 = 67, F10, "F10";
    F11 = 68, F11, "F11";
    F12 = 69, F12, "F12";
    INSERT = 73, Insert, "Ins";
    HOME = 74, Home, "Home";
    PAGE_UP = 75, PageUp, "PgUp";
    DELETE = 76, Delete, "Del";
    END = 77, End, "End";
    PAGE_DOWN = 78, PageDown, "PgDn";
    RIGHT = 79, ArrowRight, "Right";
    LEFT = 80, ArrowLeft, "Left";
    DOWN = 81, ArrowDown, "Down";
    UP = 82, ArrowUp, "Up";
    CONTROL_LEFT = 224, ControlLeft, "Ctrl";
    SHIFT_LEFT = 225, ShiftLeft, "Shift";
    ALT_LEFT = 226, AltLeft, "Alt";
    SUPER_LEFT = 227, SuperLeft, "Super";
    CONTROL_RIGHT = 228, ControlRight, "RCtrl";
    SHIFT_RIGHT = 229, ShiftRight, "RShift";
    ALT_RIGHT = 230, AltRight, "RAlt";
    SUPER_RIGHT = 231, SuperRight, "RSuper";
}
