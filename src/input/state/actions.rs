use crate::config::Action;
use crate::input::events::Key;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. Any other key is looked
    /// up in the keybinding map together with the held modifiers and the bound
    /// action, if any, is performed.
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.update(key, true) {
            return;
        }

        let Some(key_name) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_name) {
            self.handle_action(action);
        } else {
            log::trace!("No action bound to {key_name}");
        }
    }

    /// Processes a key release event.
    ///
    /// Only modifier releases matter; they update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);
    }

    /// Handle an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        if let Some(tool) = action.tool() {
            self.select_tool(tool);
            return;
        }
        if let Some(color) = action.color() {
            self.select_color(color);
            return;
        }

        match action {
            Action::Exit => {
                if self.is_drawing() {
                    // Cancel the gesture; the unfinished shape is dropped
                    self.cancel_gesture();
                } else {
                    self.should_exit = true;
                }
            }
            Action::ClearCanvas => self.clear(),
            Action::Undo => self.undo(),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                self.needs_redraw = true;
            }
            Action::SetSolid => self.select_dash(false),
            Action::SetDotted => self.select_dash(true),
            _ => {}
        }
    }

    fn cancel_gesture(&mut self) {
        if let Some(shape) = self.canvas.take_in_progress() {
            log::debug!("Cancelled {} shape", shape.tool());
        }
        self.state = super::DrawingState::Idle;
        self.needs_redraw = true;
    }
}
