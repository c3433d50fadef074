//! Ambient tool/color/mode selection.

use super::tool::Tool;
use crate::draw::{Color, StrokeStyle, color::BLACK, style};
use crate::util;
use std::fmt;

/// The toolbar selection new shapes are created with.
///
/// Changing the selection never alters a shape that already exists,
/// including the one currently being drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Tool used by the next pointer-down
    pub tool: Tool,
    /// Stroke color for outlined shapes
    pub color: Color,
    /// Dotted (true) or solid (false) outlines
    pub dashed: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            tool: Tool::Pencil,
            color: BLACK,
            dashed: false,
        }
    }
}

impl Selection {
    pub fn new(tool: Tool, color: Color, dashed: bool) -> Self {
        Self {
            tool,
            color,
            dashed,
        }
    }

    /// Style captured by a shape created under this selection.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.dashed)
    }

    /// Palette name of the current color, or "Custom".
    pub fn color_name(&self) -> &'static str {
        util::color_to_name(&self.color)
    }

    pub fn mode_name(&self) -> &'static str {
        style::mode_name(self.dashed)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tool: {} | Color: {} | Mode: {}",
            self.tool,
            self.color_name(),
            self.mode_name()
        )
    }
}
