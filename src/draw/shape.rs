//! Shape definitions for the paint canvas.

use super::color::Color;
use super::style::StrokeStyle;
use crate::input::Tool;
use crate::util::{DragBox, Point};

/// Edge length of an eraser mark in pixels.
pub const ERASER_SIZE: i32 = 10;

/// Represents a drawable shape on the canvas.
///
/// Each variant owns its own geometry plus the style it was created with.
/// Only the geometry changes after creation, and only through
/// [`Shape::extend_to`] while the shape is being dragged out.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Straight line between two points
    Line {
        /// Press position
        start: Point,
        /// Latest pointer position
        end: Point,
        /// Outline style
        style: StrokeStyle,
    },
    /// Rectangle outline
    Rect {
        /// Normalized box geometry
        bounds: DragBox,
        /// Outline style
        style: StrokeStyle,
    },
    /// Oval outline inscribed in its bounding box
    Oval {
        /// Normalized box geometry
        bounds: DragBox,
        /// Outline style
        style: StrokeStyle,
    },
    /// Freehand polyline through every pointer position
    Freehand {
        /// Visited positions in order
        points: Vec<Point>,
        /// Outline style
        style: StrokeStyle,
    },
    /// Opaque square painted with the canvas background
    EraserMark {
        /// Top-left corner
        at: Point,
        /// Fill color (the background at creation time)
        fill: Color,
    },
}

impl Shape {
    /// Creates the shape a pointer-down at `at` starts for `tool`.
    ///
    /// Outlined shapes take `style`; the eraser ignores it and fills with
    /// `background` instead.
    pub fn begin(tool: Tool, at: Point, style: StrokeStyle, background: Color) -> Self {
        match tool {
            Tool::Line => Shape::Line {
                start: at,
                end: at,
                style,
            },
            Tool::Rectangle => Shape::Rect {
                bounds: DragBox::new(at),
                style,
            },
            Tool::Oval => Shape::Oval {
                bounds: DragBox::new(at),
                style,
            },
            Tool::Pencil => Shape::Freehand {
                points: vec![at],
                style,
            },
            Tool::Eraser => Shape::EraserMark {
                at,
                fill: background,
            },
        }
    }

    /// Updates the geometry for a pointer now at (x, y).
    pub fn extend_to(&mut self, x: i32, y: i32) {
        let current = Point::new(x, y);
        match self {
            Shape::Line { end, .. } => *end = current,
            Shape::Rect { bounds, .. } | Shape::Oval { bounds, .. } => bounds.extend_to(current),
            Shape::Freehand { points, .. } => points.push(current),
            Shape::EraserMark { at, .. } => *at = current,
        }
    }

    /// Returns true for eraser marks, which commit on every move.
    pub fn is_eraser(&self) -> bool {
        matches!(self, Shape::EraserMark { .. })
    }

    /// The tool that produces this variant.
    pub fn tool(&self) -> Tool {
        match self {
            Shape::Line { .. } => Tool::Line,
            Shape::Rect { .. } => Tool::Rectangle,
            Shape::Oval { .. } => Tool::Oval,
            Shape::Freehand { .. } => Tool::Pencil,
            Shape::EraserMark { .. } => Tool::Eraser,
        }
    }

    /// Outline style, or `None` for eraser marks.
    pub fn style(&self) -> Option<&StrokeStyle> {
        match self {
            Shape::Line { style, .. }
            | Shape::Rect { style, .. }
            | Shape::Oval { style, .. }
            | Shape::Freehand { style, .. } => Some(style),
            Shape::EraserMark { .. } => None,
        }
    }
}
