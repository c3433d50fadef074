//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status bar position on the canvas.
///
/// Controls where the status bar appears relative to the canvas edges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: one of the ten palette names, or white
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts this entry to a [`Color`], or `None` for an unknown name.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::rgb8(*r, *g, *b)),
        }
    }

    /// Converts this entry to a [`Color`].
    ///
    /// Unknown color names log a warning and resolve to `fallback`.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color '{:?}', using fallback", self);
            fallback
        })
    }
}
