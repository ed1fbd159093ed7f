//! Logical actions consumed by gameplay and UI code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::FULL_SCALE;
use crate::error::{Error, Result};

/// First raw id of the UI navigation namespace.
pub const UI_BASE: u16 = 0x0100;
/// First raw id of the gameplay namespace.
pub const GAME_BASE: u16 = 0x1000;

/// Built-in menu navigation actions.
///
/// These live in a private sub-range of the raw id space so UI code can
/// rely on them regardless of the gameplay action set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum UiAction {
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    MenuApply,
    MenuConfirm,
    MenuCancel,
}

impl UiAction {
    /// Every UI action in raw id order.
    pub const ALL: [Self; 7] = [
        Self::MenuUp,
        Self::MenuDown,
        Self::MenuLeft,
        Self::MenuRight,
        Self::MenuApply,
        Self::MenuConfirm,
        Self::MenuCancel,
    ];

    const fn from_offset(offset: u16) -> Option<Self> {
        match offset {
            0 => Some(Self::MenuUp),
            1 => Some(Self::MenuDown),
            2 => Some(Self::MenuLeft),
            3 => Some(Self::MenuRight),
            4 => Some(Self::MenuApply),
            5 => Some(Self::MenuConfirm),
            6 => Some(Self::MenuCancel),
            _ => None,
        }
    }

    /// Short lowercase name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MenuUp => "menu_up",
            Self::MenuDown => "menu_down",
            Self::MenuLeft => "menu_left",
            Self::MenuRight => "menu_right",
            Self::MenuApply => "menu_apply",
            Self::MenuConfirm => "menu_confirm",
            Self::MenuCancel => "menu_cancel",
        }
    }
}

/// A consumer-defined gameplay action, identified by its index in the
/// gameplay namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameAction(u16);

impl GameAction {
    /// Largest index that still fits the raw id space.
    pub const MAX_INDEX: u16 = u16::MAX - GAME_BASE;

    /// Create a gameplay action, or `None` if `index` exceeds [`Self::MAX_INDEX`].
    #[inline]
    #[must_use]
    pub const fn new(index: u16) -> Option<Self> {
        if index <= Self::MAX_INDEX {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Index within the gameplay namespace.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for GameAction {
    type Error = Error;

    fn try_from(index: u16) -> Result<Self> {
        Self::new(index).ok_or_else(|| {
            Error::OutOfRange(format!(
                "gameplay action index {index} exceeds {}",
                Self::MAX_INDEX
            ))
        })
    }
}

/// Stable identifier of a logical action.
///
/// Raw encoding:
/// ```text
/// 0x0000..0x0100  engine reserved
/// 0x0100..0x0107  UiAction
/// 0x1000..=0xffff GameAction (index + 0x1000)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionId {
    Ui(UiAction),
    Game(GameAction),
}

impl ActionId {
    /// Gameplay action by index.
    pub fn game(index: u16) -> Result<Self> {
        GameAction::try_from(index).map(Self::Game)
    }

    /// Raw numeric id.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        match self {
            Self::Ui(ui) => UI_BASE + ui as u16,
            Self::Game(game) => GAME_BASE + game.0,
        }
    }

    /// Decode a raw numeric id.
    pub fn from_raw(raw: u16) -> Result<Self> {
        if raw >= GAME_BASE {
            return Ok(Self::Game(GameAction(raw - GAME_BASE)));
        }
        raw.checked_sub(UI_BASE)
            .and_then(UiAction::from_offset)
            .map(Self::Ui)
            .ok_or(Error::UnknownAction(raw))
    }

    /// Returns true if this is a built-in UI navigation action.
    #[inline]
    #[must_use]
    pub const fn is_ui(self) -> bool {
        matches!(self, Self::Ui(_))
    }
}

impl From<UiAction> for ActionId {
    fn from(ui: UiAction) -> Self {
        Self::Ui(ui)
    }
}

impl From<GameAction> for ActionId {
    fn from(game: GameAction) -> Self {
        Self::Game(game)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ui(ui) => write!(f, "ui:{}", ui.name()),
            Self::Game(game) => write!(f, "game:{}", game.0),
        }
    }
}

/// A resolved action: what happened and how strongly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// Logical identifier
    pub id: ActionId,
    /// Resolved magnitude
    pub value: i16,
}

impl Action {
    /// Create a resolved action.
    #[inline]
    #[must_use]
    pub const fn new(id: ActionId, value: i16) -> Self {
        Self { id, value }
    }

    /// Returns true if both actions describe the same logical event,
    /// whatever their values.
    #[inline]
    #[must_use]
    pub fn same_event(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Returns true if the value is non-zero.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.value != 0
    }

    /// Value as a float in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> f32 {
        (f32::from(self.value) / f32::from(FULL_SCALE)).max(-1.0)
    }
}
