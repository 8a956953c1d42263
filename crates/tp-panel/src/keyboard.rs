//! Keyboard input classification.
//!
//! Raw key presses are mapped to the four abstract actions the panel
//! understands. Focus loss is not a key; hosts report it separately and it
//! arrives as [`PanelAction::Blur`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Keys the classifier distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Enter,
    Tab,
    Escape,
    Character(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArrowLeft => f.write_str("left"),
            Self::ArrowRight => f.write_str("right"),
            Self::ArrowUp => f.write_str("up"),
            Self::ArrowDown => f.write_str("down"),
            Self::PageUp => f.write_str("pageup"),
            Self::PageDown => f.write_str("pagedown"),
            Self::Enter => f.write_str("enter"),
            Self::Tab => f.write_str("tab"),
            Self::Escape => f.write_str("escape"),
            Self::Character(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized key '{0}'")]
pub struct KeyParseError(pub String);

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_ascii_lowercase().as_str() {
            "left" | "arrowleft" => Self::ArrowLeft,
            "right" | "arrowright" => Self::ArrowRight,
            "up" | "arrowup" => Self::ArrowUp,
            "down" | "arrowdown" => Self::ArrowDown,
            "pageup" => Self::PageUp,
            "pagedown" => Self::PageDown,
            "enter" | "return" => Self::Enter,
            "tab" => Self::Tab,
            "esc" | "escape" => Self::Escape,
            _ => {
                let mut chars = s.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => return Err(KeyParseError(s.to_string())),
                }
            }
        };
        Ok(key)
    }
}

/// Modifier keys held during a press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Ctrl on Windows/Linux, Cmd on macOS.
    #[must_use]
    pub const fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// A press without modifiers.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: false,
                meta: false,
                shift: false,
                alt: false,
            },
        }
    }

    #[must_use]
    pub const fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// Movement direction along a row of columns or a column of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// `-1` or `+1`.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Abstract actions driving the focus controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Move focus to the neighbouring column.
    MoveColumn(Direction),
    /// Step the focused column's value (or focus the first column).
    MoveValue(Direction),
    /// Accept the current value.
    Commit,
    /// The panel lost focus.
    Blur,
}

impl fmt::Display for PanelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveColumn(d) => write!(f, "move-column({:+})", d.delta()),
            Self::MoveValue(d) => write!(f, "move-value({:+})", d.delta()),
            Self::Commit => f.write_str("commit"),
            Self::Blur => f.write_str("blur"),
        }
    }
}

/// Map a key press to a panel action, or `None` if the panel ignores it.
///
/// Ctrl/Cmd + Left/Right is reserved for page-level navigation and is not
/// treated as column movement.
#[must_use]
pub fn classify(input: &KeyInput) -> Option<PanelAction> {
    match input.key {
        Key::ArrowLeft if !input.modifiers.command() => {
            Some(PanelAction::MoveColumn(Direction::Backward))
        }
        Key::ArrowRight if !input.modifiers.command() => {
            Some(PanelAction::MoveColumn(Direction::Forward))
        }
        Key::ArrowUp => Some(PanelAction::MoveValue(Direction::Backward)),
        Key::ArrowDown => Some(PanelAction::MoveValue(Direction::Forward)),
        Key::Enter => Some(PanelAction::Commit),
        _ => None,
    }
}
