use crate::draw::{Shape, render_canvas};

use super::InputState;

impl InputState {
    /// Returns the shape currently being drawn, for live preview.
    pub fn in_progress_shape(&self) -> Option<&Shape> {
        self.canvas.in_progress()
    }

    /// Repaints the full canvas: background, committed shapes, then the
    /// in-progress shape. Clears the redraw flag.
    pub fn render(&mut self, ctx: &cairo::Context) {
        render_canvas(ctx, &self.canvas, self.background);
        self.needs_redraw = false;
    }
}
