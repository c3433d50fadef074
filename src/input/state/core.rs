//! Drawing state machine and input state management.

use crate::config::{Action, Config, KeyBinding};
use crate::draw::{CanvasModel, Color, color::WHITE};
use crate::input::{modifiers::Modifiers, selection::Selection, tool::Tool};
use crate::util::Point;
use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or dragging out a shape. The shape itself
/// lives in the canvas as its in-progress entry; this only records the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a pointer-down
    Idle,
    /// Pointer is held down and a shape is being dragged out
    Drawing {
        /// Tool the gesture was started with
        tool: Tool,
        /// Where the pointer was pressed
        start: Point,
    },
}

/// Main input state containing all drawing session state.
///
/// This struct holds the canvas (committed shapes plus the one being drawn),
/// the toolbar selection, modifier keys, drawing mode, and UI flags. It processes
/// pointer and keyboard events to update the drawing state and determine when
/// redraws are needed.
pub struct InputState {
    /// Committed history and in-progress shape
    pub canvas: CanvasModel,
    /// Tool, color and solid/dotted mode for the next shape
    pub selection: Selection,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Canvas background, also the eraser fill
    pub background: Color,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether the user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible (toggled with F10)
    pub show_help: bool,
    /// Whether the status bar is currently visible (toggled via keybinding)
    pub show_status_bar: bool,
    /// Surface width in pixels (set by the collaborator after configuration)
    pub screen_width: u32,
    /// Surface height in pixels (set by the collaborator after configuration)
    pub screen_height: u32,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// Screen dimensions default to 0 and should be updated by the collaborator
    /// after surface configuration (see `update_screen_dimensions`).
    pub fn with_defaults(
        selection: Selection,
        background: Color,
        show_status_bar: bool,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            canvas: CanvasModel::new(),
            selection,
            state: DrawingState::Idle,
            background,
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            screen_width: 0,
            screen_height: 0,
            action_map,
        }
    }

    /// Builds the initial state from a loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the configured keybindings are malformed or collide.
    pub fn from_config(config: &Config) -> Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(|err| anyhow!("Invalid keybindings: {err}"))?;

        let selection = Selection::new(
            config.drawing.default_tool,
            config.drawing.default_color.to_color_or(Selection::default().color),
            config.drawing.default_dashed,
        );
        let background = config.canvas.background_color.to_color_or(WHITE);

        let mut state = Self::with_defaults(
            selection,
            background,
            config.ui.show_status_bar,
            action_map,
        );
        state.update_screen_dimensions(config.canvas.width, config.canvas.height);
        Ok(state)
    }

    /// Selects the tool used by the next pointer-down.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.selection.tool != tool {
            log::debug!("Tool changed to {tool}");
        }
        self.selection.tool = tool;
        self.mark_ui_changed();
    }

    /// Selects the stroke color for shapes created from now on.
    pub fn select_color(&mut self, color: Color) {
        self.selection.color = color;
        log::debug!("Color changed to {}", self.selection.color_name());
        self.mark_ui_changed();
    }

    /// Switches between dotted (`true`) and solid outlines for new shapes.
    pub fn select_dash(&mut self, dashed: bool) {
        self.selection.dashed = dashed;
        log::debug!("Mode changed to {}", self.selection.mode_name());
        self.mark_ui_changed();
    }

    /// Removes every committed shape. A shape being drawn is kept.
    pub fn clear(&mut self) {
        let removed = self.canvas.len();
        self.canvas.clear();
        self.needs_redraw = true;
        log::debug!("Cleared {removed} shape(s)");
    }

    /// Removes the most recently committed shape; does nothing on an empty history.
    pub fn undo(&mut self) {
        if let Some(shape) = self.canvas.undo() {
            log::debug!("Undid {} shape", shape.tool());
            self.needs_redraw = true;
        }
    }

    /// Current toolbar selection. Never changes state.
    pub fn describe_state(&self) -> Selection {
        self.selection
    }

    /// Returns true while a pointer gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Updates screen dimensions after surface configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        self.needs_redraw = true;
    }

    /// Look up the action bound to `key_name` under the current modifiers.
    pub(super) fn find_action(&self, key_name: &str) -> Option<Action> {
        let binding = KeyBinding {
            key: key_name.to_string(),
            ctrl: self.modifiers.ctrl,
            shift: self.modifiers.shift,
            alt: self.modifiers.alt,
        };
        self.action_map.get(&binding).copied()
    }

    /// The status bar shows the selection, so it needs a repaint.
    fn mark_ui_changed(&mut self) {
        self.needs_redraw = true;
    }
}
