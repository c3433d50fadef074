//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations (and gesture scripts) map their native key codes
/// to these generic key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// F10 function key (toggle help)
    F10,
    /// F12 function key (toggle status bar)
    F12,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses the key part of a binding string ("Z", "Escape", "F10").
    ///
    /// Names are case-insensitive; a single character maps to [`Key::Char`].
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            "f10" => Key::F10,
            "f12" => Key::F12,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// Canonical name used for keybinding lookup, or `None` for keys that
    /// never trigger actions on their own (modifiers, unknown keys).
    pub fn binding_name(&self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_ascii_uppercase().to_string()),
            Key::Escape => "Escape",
            Key::Return => "Return",
            Key::Backspace => "Backspace",
            Key::Space => "Space",
            Key::F10 => "F10",
            Key::F12 => "F12",
            Key::Tab | Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }

    /// Returns true for Shift/Ctrl/Alt.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Shift | Key::Ctrl | Key::Alt)
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (the only button that draws)
    Left,
    /// Right mouse button (ignored)
    Right,
    /// Middle mouse button (ignored)
    Middle,
}
