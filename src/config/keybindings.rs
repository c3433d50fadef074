//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that maps keyboard
//! shortcuts onto the same operations the toolbar buttons perform.

use crate::draw::{Color, color::*};
use crate::input::{Key, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit and cancellation
    Exit,

    // History
    ClearCanvas,
    Undo,

    // UI toggles
    ToggleHelp,
    ToggleStatusBar,

    // Tool buttons
    SelectLine,
    SelectRectangle,
    SelectOval,
    SelectPencil,
    SelectEraser,

    // Stroke mode
    SetSolid,
    SetDotted,

    // Palette swatches
    SetColorBlack,
    SetColorRed,
    SetColorBlue,
    SetColorGreen,
    SetColorYellow,
    SetColorOrange,
    SetColorCyan,
    SetColorMagenta,
    SetColorPink,
    SetColorGray,
}

impl Action {
    /// Tool selected by this action, if it is a tool button.
    pub fn tool(&self) -> Option<Tool> {
        match self {
            Action::SelectLine => Some(Tool::Line),
            Action::SelectRectangle => Some(Tool::Rectangle),
            Action::SelectOval => Some(Tool::Oval),
            Action::SelectPencil => Some(Tool::Pencil),
            Action::SelectEraser => Some(Tool::Eraser),
            _ => None,
        }
    }

    /// Palette color selected by this action, if it is a swatch.
    pub fn color(&self) -> Option<Color> {
        match self {
            Action::SetColorBlack => Some(BLACK),
            Action::SetColorRed => Some(RED),
            Action::SetColorBlue => Some(BLUE),
            Action::SetColorGreen => Some(GREEN),
            Action::SetColorYellow => Some(YELLOW),
            Action::SetColorOrange => Some(ORANGE),
            Action::SetColorCyan => Some(CYAN),
            Action::SetColorMagenta => Some(MAGENTA),
            Action::SetColorPink => Some(PINK),
            Action::SetColorGray => Some(GRAY),
            _ => None,
        }
    }
}

/// A single keybinding: a key name with optional modifiers.
///
/// The key is stored in canonical form (`"Z"`, `"Escape"`, `"F10"`), so
/// `"ctrl+z"` and `"Ctrl+Z"` parse to equal bindings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Z" or "Escape".
    ///
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    /// A trailing "++" binds the '+' key itself.
    pub fn parse(s: &str) -> Result<Self, String> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let (modifiers, key_name) = if compact == "+" {
            ("", "+")
        } else if let Some(prefix) = compact.strip_suffix("++") {
            (prefix, "+")
        } else {
            match compact.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", compact.as_str()),
            }
        };

        let mut binding = Self {
            key: String::new(),
            ctrl: false,
            shift: false,
            alt: false,
        };

        for part in modifiers.split('+').filter(|part| !part.is_empty()) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                other => return Err(format!("Unknown modifier '{other}' in: {s}")),
            }
        }

        let key = Key::from_name(key_name).ok_or_else(|| format!("Unknown key in: {s}"))?;
        binding.key = key
            .binding_name()
            .ok_or_else(|| format!("No key specified in: {s}"))?;
        Ok(binding)
    }

    /// The key press this binding is triggered by.
    pub fn key(&self) -> Key {
        Key::from_name(&self.key).unwrap_or(Key::Unknown)
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        f.write_str(&self.key)
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// undo = ["Ctrl+Z"]
/// select_eraser = ["E"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,

    #[serde(default = "default_toggle_status_bar")]
    pub toggle_status_bar: Vec<String>,

    #[serde(default = "default_select_line")]
    pub select_line: Vec<String>,

    #[serde(default = "default_select_rectangle")]
    pub select_rectangle: Vec<String>,

    #[serde(default = "default_select_oval")]
    pub select_oval: Vec<String>,

    #[serde(default = "default_select_pencil")]
    pub select_pencil: Vec<String>,

    #[serde(default = "default_select_eraser")]
    pub select_eraser: Vec<String>,

    #[serde(default = "default_set_solid")]
    pub set_solid: Vec<String>,

    #[serde(default = "default_set_dotted")]
    pub set_dotted: Vec<String>,

    #[serde(default = "default_set_color_black")]
    pub set_color_black: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_yellow")]
    pub set_color_yellow: Vec<String>,

    #[serde(default = "default_set_color_orange")]
    pub set_color_orange: Vec<String>,

    #[serde(default = "default_set_color_cyan")]
    pub set_color_cyan: Vec<String>,

    #[serde(default = "default_set_color_magenta")]
    pub set_color_magenta: Vec<String>,

    #[serde(default = "default_set_color_pink")]
    pub set_color_pink: Vec<String>,

    #[serde(default = "default_set_color_gray")]
    pub set_color_gray: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            clear_canvas: default_clear_canvas(),
            undo: default_undo(),
            toggle_help: default_toggle_help(),
            toggle_status_bar: default_toggle_status_bar(),
            select_line: default_select_line(),
            select_rectangle: default_select_rectangle(),
            select_oval: default_select_oval(),
            select_pencil: default_select_pencil(),
            select_eraser: default_select_eraser(),
            set_solid: default_set_solid(),
            set_dotted: default_set_dotted(),
            set_color_black: default_set_color_black(),
            set_color_red: default_set_color_red(),
            set_color_blue: default_set_color_blue(),
            set_color_green: default_set_color_green(),
            set_color_yellow: default_set_color_yellow(),
            set_color_orange: default_set_color_orange(),
            set_color_cyan: default_set_color_cyan(),
            set_color_magenta: default_set_color_magenta(),
            set_color_pink: default_set_color_pink(),
            set_color_gray: default_set_color_gray(),
        }
    }
}

impl KeybindingsConfig {
    fn entries(&self) -> [(&[String], Action); 22] {
        [
            (self.exit.as_slice(), Action::Exit),
            (self.clear_canvas.as_slice(), Action::ClearCanvas),
            (self.undo.as_slice(), Action::Undo),
            (self.toggle_help.as_slice(), Action::ToggleHelp),
            (self.toggle_status_bar.as_slice(), Action::ToggleStatusBar),
            (self.select_line.as_slice(), Action::SelectLine),
            (self.select_rectangle.as_slice(), Action::SelectRectangle),
            (self.select_oval.as_slice(), Action::SelectOval),
            (self.select_pencil.as_slice(), Action::SelectPencil),
            (self.select_eraser.as_slice(), Action::SelectEraser),
            (self.set_solid.as_slice(), Action::SetSolid),
            (self.set_dotted.as_slice(), Action::SetDotted),
            (self.set_color_black.as_slice(), Action::SetColorBlack),
            (self.set_color_red.as_slice(), Action::SetColorRed),
            (self.set_color_blue.as_slice(), Action::SetColorBlue),
            (self.set_color_green.as_slice(), Action::SetColorGreen),
            (self.set_color_yellow.as_slice(), Action::SetColorYellow),
            (self.set_color_orange.as_slice(), Action::SetColorOrange),
            (self.set_color_cyan.as_slice(), Action::SetColorCyan),
            (self.set_color_magenta.as_slice(), Action::SetColorMagenta),
            (self.set_color_pink.as_slice(), Action::SetColorPink),
            (self.set_color_gray.as_slice(), Action::SetColorGray),
        ]
    }

    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }

    /// First configured binding for `action`, for help text.
    pub fn label_for(&self, action: Action) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(_, candidate)| *candidate == action)
            .and_then(|(bindings, _)| bindings.first())
            .map(String::as_str)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|key| key.to_string()).collect()
}

fn default_exit() -> Vec<String> {
    keys(&["Escape", "Ctrl+Q"])
}

fn default_clear_canvas() -> Vec<String> {
    keys(&["Ctrl+X"])
}

fn default_undo() -> Vec<String> {
    keys(&["Ctrl+Z"])
}

fn default_toggle_help() -> Vec<String> {
    keys(&["F10"])
}

fn default_toggle_status_bar() -> Vec<String> {
    keys(&["F12"])
}

fn default_select_line() -> Vec<String> {
    keys(&["L"])
}

fn default_select_rectangle() -> Vec<String> {
    keys(&["R"])
}

fn default_select_oval() -> Vec<String> {
    keys(&["O"])
}

fn default_select_pencil() -> Vec<String> {
    keys(&["P"])
}

fn default_select_eraser() -> Vec<String> {
    keys(&["E"])
}

fn default_set_solid() -> Vec<String> {
    keys(&["S"])
}

fn default_set_dotted() -> Vec<String> {
    keys(&["D"])
}

fn default_set_color_black() -> Vec<String> {
    keys(&["1"])
}

fn default_set_color_red() -> Vec<String> {
    keys(&["2"])
}

fn default_set_color_blue() -> Vec<String> {
    keys(&["3"])
}

fn default_set_color_green() -> Vec<String> {
    keys(&["4"])
}

fn default_set_color_yellow() -> Vec<String> {
    keys(&["5"])
}

fn default_set_color_orange() -> Vec<String> {
    keys(&["6"])
}

fn default_set_color_cyan() -> Vec<String> {
    keys(&["7"])
}

fn default_set_color_magenta() -> Vec<String> {
    keys(&["8"])
}

fn default_set_color_pink() -> Vec<String> {
    keys(&["9"])
}

fn default_set_color_gray() -> Vec<String> {
    keys(&["0"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
        assert_eq!(binding.key(), Key::Char('Z'));
    }

    #[test]
    fn test_parse_normalizes_case_and_spaces() {
        let lower = KeyBinding::parse("ctrl + shift + z").unwrap();
        let upper = KeyBinding::parse("Shift+Ctrl+Z").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "Ctrl+Shift+Z");
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_parse_rejects_malformed_bindings() {
        assert!(KeyBinding::parse("").is_err());
        assert!(KeyBinding::parse("Ctrl+").is_err());
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("Hyper+Z").is_err());
        assert!(KeyBinding::parse("Ctrl+F13").is_err());
    }

    #[test]
    fn test_build_action_map() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Exit));

        let ctrl_z = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(map.get(&ctrl_z), Some(&Action::Undo));

        let zero = KeyBinding::parse("0").unwrap();
        assert_eq!(map.get(&zero), Some(&Action::SetColorGray));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.exit = vec!["Ctrl+Z".to_string()];

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
        assert!(err_msg.contains("Ctrl+Z"));
    }

    #[test]
    fn test_duplicate_with_different_case() {
        let mut config = KeybindingsConfig::default();
        config.select_line = vec!["r".to_string()];

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
    }

    #[test]
    fn test_palette_actions_cover_every_swatch() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();
        for (_, color) in PALETTE {
            assert!(map.values().any(|action| action.color() == Some(color)));
        }
        for tool in Tool::ALL {
            assert!(map.values().any(|action| action.tool() == Some(tool)));
        }
    }

    #[test]
    fn test_label_for_reports_first_binding() {
        let config = KeybindingsConfig::default();
        assert_eq!(config.label_for(Action::Exit), Some("Escape"));
        assert_eq!(config.label_for(Action::SelectOval), Some("O"));
    }
}
