use crate::draw::Shape;
use crate::input::events::MouseButton;
use crate::util::Point;

use super::{DrawingState, InputState};

impl InputState {
    /// Starts a new shape of the selected tool at (x, y).
    ///
    /// A shape left over from an earlier gesture (an unfinished one whose
    /// release was missed, or the trailing eraser mark) is discarded.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) {
        if let Some(previous) = self.canvas.take_in_progress() {
            if self.is_drawing() {
                log::debug!("Discarding unfinished {} shape", previous.tool());
            }
        }

        let tool = self.selection.tool;
        let start = Point::new(x, y);
        let shape = Shape::begin(tool, start, self.selection.stroke_style(), self.background);
        self.canvas.set_in_progress(Some(shape));
        self.state = DrawingState::Drawing { tool, start };
        self.needs_redraw = true;
    }

    /// Extends the in-progress shape to (x, y).
    ///
    /// Eraser marks are committed on every move; the mark that stays in
    /// progress is a fresh one at the same position.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        if !self.is_drawing() {
            return;
        }
        let Some(shape) = self.canvas.in_progress_mut() else {
            return;
        };

        shape.extend_to(x, y);
        if shape.is_eraser() {
            let mark = shape.clone();
            self.canvas.commit(mark);
        }
        self.needs_redraw = true;
    }

    /// Ends the gesture.
    ///
    /// Non-eraser shapes are committed as they were after the last move; the
    /// release position itself does not change the geometry. After an eraser
    /// gesture the trailing mark stays in progress.
    pub fn on_pointer_up(&mut self, _x: i32, _y: i32) {
        if !self.is_drawing() {
            return;
        }
        self.state = DrawingState::Idle;

        let is_eraser = self.canvas.in_progress().is_some_and(Shape::is_eraser);
        if is_eraser {
            return;
        }

        if let Some(shape) = self.canvas.take_in_progress() {
            log::debug!("Committed {} shape", shape.tool());
            self.canvas.commit(shape);
            self.needs_redraw = true;
        }
    }

    /// Processes a mouse button press event.
    ///
    /// Only the left button draws; other buttons are ignored.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button == MouseButton::Left {
            self.on_pointer_down(x, y);
        }
    }

    /// Processes mouse motion (dragging) events.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.on_pointer_move(x, y);
    }

    /// Processes mouse button release events.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button == MouseButton::Left {
            self.on_pointer_up(x, y);
        }
    }
}
