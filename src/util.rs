//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Name/color mapping for the palette (constants live in draw::color)
//! - Geometry primitives: points and drag boxes

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Tolerance used when matching an arbitrary color against the palette.
const COLOR_MATCH_TOLERANCE: f64 = 0.01;

/// Maps color name strings to Color values.
///
/// Used by the configuration system and gesture scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - the ten palette names: "black", "red", "blue", "green", "yellow",
///   "orange", "cyan", "magenta", "pink", "gray" (or "grey")
/// - "white"
///
/// # Returns
/// - `Some(Color)` if the name matches a known color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim().to_lowercase();
    match name.as_str() {
        "white" => return Some(WHITE),
        "grey" => return Some(GRAY),
        _ => {}
    }
    PALETTE
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(&name))
        .map(|(_, color)| *color)
}

/// Maps a Color value to its human-readable name.
///
/// Used by the status bar to display the current color name.
///
/// # Returns
/// A static string with the palette name, "White", or "Custom" if the color
/// doesn't match any known color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.approx_eq(&WHITE, COLOR_MATCH_TOLERANCE) {
        return "White";
    }
    PALETTE
        .iter()
        .find(|(_, entry)| color.approx_eq(entry, COLOR_MATCH_TOLERANCE))
        .map(|(name, _)| *name)
        .unwrap_or("Custom")
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A canvas position in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Box geometry dragged out from the press point.
///
/// Each move measures the span from the stored corner and then pulls the
/// corner to the smaller coordinate, so `x`/`y` only ever move up and left
/// over a drag. `width`/`height` are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragBox {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Horizontal extent (>= 0)
    pub width: i32,
    /// Vertical extent (>= 0)
    pub height: i32,
}

impl DragBox {
    /// Creates a zero-size box at `at`.
    pub fn new(at: Point) -> Self {
        Self {
            x: at.x,
            y: at.y,
            width: 0,
            height: 0,
        }
    }

    /// Stretches the box toward `current`.
    pub fn extend_to(&mut self, current: Point) {
        self.width = span(self.x, current.x);
        self.height = span(self.y, current.y);
        self.x = self.x.min(current.x);
        self.y = self.y.min(current.y);
    }
}

/// Distance between two coordinates, saturating at `i32::MAX`.
fn span(a: i32, b: i32) -> i32 {
    i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX)
}
