//! Canvas model: committed shape history plus the shape being drawn.

use super::shape::Shape;

/// Container for all shapes in the current drawing session.
///
/// `committed` is both draw order (first = bottom layer) and undo order.
/// At most one shape is in progress at a time; it is drawn on top of the
/// history but is not part of it until committed.
#[derive(Debug, Clone, Default)]
pub struct CanvasModel {
    committed: Vec<Shape>,
    in_progress: Option<Shape>,
}

impl CanvasModel {
    /// Creates an empty canvas with nothing in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape to the history (drawn on top of existing shapes).
    pub fn commit(&mut self, shape: Shape) {
        self.committed.push(shape);
    }

    /// Replaces the in-progress shape, returning the previous one.
    pub fn set_in_progress(&mut self, shape: Option<Shape>) -> Option<Shape> {
        std::mem::replace(&mut self.in_progress, shape)
    }

    /// Removes and returns the in-progress shape.
    pub fn take_in_progress(&mut self) -> Option<Shape> {
        self.in_progress.take()
    }

    pub fn in_progress(&self) -> Option<&Shape> {
        self.in_progress.as_ref()
    }

    pub fn in_progress_mut(&mut self) -> Option<&mut Shape> {
        self.in_progress.as_mut()
    }

    /// Removes all committed shapes. The in-progress shape is left alone.
    pub fn clear(&mut self) {
        self.committed.clear();
    }

    /// Removes and returns the most recently committed shape, if any.
    pub fn undo(&mut self) -> Option<Shape> {
        self.committed.pop()
    }

    /// Committed shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.committed
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Everything to draw, bottom to top: the history, then the in-progress shape.
    pub fn snapshot(&self) -> impl Iterator<Item = &Shape> {
        self.committed.iter().chain(self.in_progress.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::StrokeStyle;
    use crate::draw::color::{BLACK, BLUE, RED, WHITE};
    use crate::input::Tool;
    use crate::util::Point;

    fn line(x: i32, color: crate::draw::Color) -> Shape {
        let mut shape = Shape::begin(
            Tool::Line,
            Point::new(x, 0),
            StrokeStyle::new(color, false),
            WHITE,
        );
        shape.extend_to(x, 10);
        shape
    }

    #[test]
    fn undo_pops_most_recent_and_keeps_order() {
        let mut canvas = CanvasModel::new();
        canvas.commit(line(1, BLACK));
        canvas.commit(line(2, RED));
        canvas.commit(line(3, BLUE));

        let undone = canvas.undo().expect("history is not empty");
        assert_eq!(undone, line(3, BLUE));
        assert_eq!(canvas.shapes(), &[line(1, BLACK), line(2, RED)]);
    }

    #[test]
    fn undo_on_empty_is_noop() {
        let mut canvas = CanvasModel::new();
        assert!(canvas.undo().is_none());
        assert!(canvas.is_empty());
    }

    #[test]
    fn clear_then_undo_leaves_canvas_empty() {
        let mut canvas = CanvasModel::new();
        canvas.commit(line(1, BLACK));
        canvas.commit(line(2, BLACK));
        canvas.clear();
        assert_eq!(canvas.len(), 0);
        assert!(canvas.undo().is_none());
        assert_eq!(canvas.len(), 0);
    }

    #[test]
    fn clear_and_undo_leave_in_progress_untouched() {
        let mut canvas = CanvasModel::new();
        canvas.commit(line(1, BLACK));
        canvas.set_in_progress(Some(line(9, RED)));

        canvas.undo();
        canvas.clear();
        assert_eq!(canvas.in_progress(), Some(&line(9, RED)));
    }

    #[test]
    fn snapshot_lists_in_progress_last() {
        let mut canvas = CanvasModel::new();
        canvas.commit(line(1, BLACK));
        canvas.commit(line(2, BLACK));
        assert_eq!(canvas.snapshot().count(), 2);

        canvas.set_in_progress(Some(line(3, RED)));
        let drawn: Vec<_> = canvas.snapshot().collect();
        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn[2], &line(3, RED));

        assert_eq!(canvas.take_in_progress(), Some(line(3, RED)));
        assert!(canvas.in_progress().is_none());
    }
}
