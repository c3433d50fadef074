//! Gesture scripts: recorded toolbar, pointer and keyboard events.
//!
//! A script is a TOML file with one `[[event]]` table per UI event. Replaying
//! it drives an [`InputState`] exactly as a window toolkit would, so the
//! headless backend can render the resulting canvas.
//!
//! ```toml
//! [[event]]
//! type = "select-tool"
//! tool = "rectangle"
//!
//! [[event]]
//! type = "drag"
//! points = [[50, 50], [10, 30]]
//!
//! [[event]]
//! type = "key"
//! binding = "Ctrl+Z"
//! ```

use crate::config::{ColorSpec, KeyBinding};
use crate::input::{InputState, Key, Tool};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or replaying a gesture script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Event {index}: drag needs at least one point")]
    EmptyDrag { index: usize },

    #[error("Event {index}: unknown color {color:?}")]
    UnknownColor { index: usize, color: ColorSpec },

    #[error("Event {index}: invalid key binding '{binding}': {reason}")]
    InvalidKey {
        index: usize,
        binding: String,
        reason: String,
    },
}

/// One recorded UI event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Toolbar tool button
    SelectTool { tool: Tool },
    /// Palette swatch (or any RGB color)
    SelectColor { color: ColorSpec },
    /// Solid/dotted toggle
    SelectDash { dashed: bool },
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp { x: i32, y: i32 },
    /// Down at the first point, move through the rest, up at the last
    Drag { points: Vec<[i32; 2]> },
    /// Keyboard shortcut such as "Ctrl+Z" or "R"
    Key { binding: String },
    /// Clear button
    Clear,
    /// Undo button
    Undo,
}

/// A parsed gesture script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let text = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_named(&text, &path.display().to_string())
    }

    /// Parses script text.
    pub fn parse(text: &str) -> Result<Self, ReplayError> {
        Self::parse_named(text, "<inline>")
    }

    fn parse_named(text: &str, origin: &str) -> Result<Self, ReplayError> {
        let script: Script = toml::from_str(text).map_err(|source| ReplayError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        log::debug!("Parsed {} event(s) from {}", script.events.len(), origin);
        Ok(script)
    }

    /// Feeds every event to `state` in order.
    ///
    /// Stops at the first invalid event; events before it have already been
    /// applied.
    pub fn apply(&self, state: &mut InputState) -> Result<(), ReplayError> {
        for (index, event) in self.events.iter().enumerate() {
            apply_event(state, index, event)?;
            if state.should_exit {
                log::info!("Script requested exit at event {index}; stopping replay");
                break;
            }
        }
        Ok(())
    }
}

fn apply_event(state: &mut InputState, index: usize, event: &ScriptEvent) -> Result<(), ReplayError> {
    log::trace!("Event {index}: {event:?}");
    match event {
        ScriptEvent::SelectTool { tool } => state.select_tool(*tool),
        ScriptEvent::SelectColor { color } => {
            let resolved = color.try_to_color().ok_or_else(|| ReplayError::UnknownColor {
                index,
                color: color.clone(),
            })?;
            state.select_color(resolved);
        }
        ScriptEvent::SelectDash { dashed } => state.select_dash(*dashed),
        ScriptEvent::PointerDown { x, y } => state.on_pointer_down(*x, *y),
        ScriptEvent::PointerMove { x, y } => state.on_pointer_move(*x, *y),
        ScriptEvent::PointerUp { x, y } => state.on_pointer_up(*x, *y),
        ScriptEvent::Drag { points } => {
            let (&[x0, y0], rest) = points
                .split_first()
                .ok_or(ReplayError::EmptyDrag { index })?;
            state.on_pointer_down(x0, y0);
            for &[x, y] in rest {
                state.on_pointer_move(x, y);
            }
            let [x1, y1] = rest.last().copied().unwrap_or([x0, y0]);
            state.on_pointer_up(x1, y1);
        }
        ScriptEvent::Key { binding } => press_binding(state, index, binding)?,
        ScriptEvent::Clear => state.clear(),
        ScriptEvent::Undo => state.undo(),
    }
    Ok(())
}

/// Presses the binding's modifiers, taps its key, then releases the modifiers.
fn press_binding(state: &mut InputState, index: usize, binding: &str) -> Result<(), ReplayError> {
    let parsed = KeyBinding::parse(binding).map_err(|reason| ReplayError::InvalidKey {
        index,
        binding: binding.to_string(),
        reason,
    })?;

    let modifiers: Vec<Key> = [
        (parsed.ctrl, Key::Ctrl),
        (parsed.shift, Key::Shift),
        (parsed.alt, Key::Alt),
    ]
    .into_iter()
    .filter_map(|(held, key)| held.then_some(key))
    .collect();

    for key in &modifiers {
        state.on_key_press(*key);
    }
    let key = parsed.key();
    state.on_key_press(key);
    state.on_key_release(key);
    for key in modifiers.iter().rev() {
        state.on_key_release(*key);
    }
    Ok(())
}
