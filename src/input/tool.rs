//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing tool selection.
///
/// The selected tool determines which shape variant the next pointer-down
/// creates. Changing it never touches a shape that is already being drawn.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Straight line from the press point to the pointer
    Line,
    /// Rectangle outline spanning the drag
    Rectangle,
    /// Oval inscribed in the drag box
    Oval,
    /// Freehand path following every pointer move
    #[default]
    Pencil,
    /// Leaves a trail of background-colored squares
    Eraser,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 5] = [
        Tool::Line,
        Tool::Rectangle,
        Tool::Oval,
        Tool::Pencil,
        Tool::Eraser,
    ];

    /// Display name used by the status bar.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Oval => "Oval",
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pencil_is_the_default_tool() {
        assert_eq!(Tool::default(), Tool::Pencil);
    }
}
