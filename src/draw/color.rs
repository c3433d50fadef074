//! RGBA color type and the toolbar palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
/// Shapes are always drawn with opaque colors; alpha exists so the same type
/// can describe UI overlays such as the status bar background.
///
/// # Examples
///
/// ```
/// use paintbrush::draw::Color;
/// let red = Color::rgb8(255, 0, 0);
/// assert_eq!(red, Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 - 1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns true when every channel is within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &Color, tolerance: f64) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
            && (self.a - other.a).abs() <= tolerance
    }

    /// Sets this color as the Cairo source.
    pub fn apply_source(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Palette (the ten toolbar swatches, in toolbar order)
// ============================================================================

pub const BLACK: Color = Color::rgb8(0, 0, 0);
pub const RED: Color = Color::rgb8(255, 0, 0);
pub const BLUE: Color = Color::rgb8(0, 0, 255);
pub const GREEN: Color = Color::rgb8(0, 255, 0);
pub const YELLOW: Color = Color::rgb8(255, 255, 0);
pub const ORANGE: Color = Color::rgb8(255, 200, 0);
pub const CYAN: Color = Color::rgb8(0, 255, 255);
pub const MAGENTA: Color = Color::rgb8(255, 0, 255);
pub const PINK: Color = Color::rgb8(255, 175, 175);
pub const GRAY: Color = Color::rgb8(128, 128, 128);

/// Default canvas background, also the eraser fill.
pub const WHITE: Color = Color::rgb8(255, 255, 255);

/// Named palette entries in toolbar order.
pub const PALETTE: [(&str, Color); 10] = [
    ("Black", BLACK),
    ("Red", RED),
    ("Blue", BLUE),
    ("Green", GREEN),
    ("Yellow", YELLOW),
    ("Orange", ORANGE),
    ("Cyan", CYAN),
    ("Magenta", MAGENTA),
    ("Pink", PINK),
    ("Gray", GRAY),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_scales_channels() {
        let orange = Color::rgb8(255, 200, 0);
        assert_eq!(orange.r, 1.0);
        assert!((orange.g - 200.0 / 255.0).abs() < f64::EPSILON);
        assert_eq!(orange.b, 0.0);
        assert_eq!(orange.a, 1.0);
    }

    #[test]
    fn approx_eq_respects_tolerance() {
        let gray = Color::new(0.5, 0.5, 0.5, 1.0);
        assert!(gray.approx_eq(&GRAY, 0.01));
        assert!(!gray.approx_eq(&BLACK, 0.01));
    }

    #[test]
    fn palette_colors_are_opaque_and_distinct() {
        for (i, (_, a)) in PALETTE.iter().enumerate() {
            assert_eq!(a.a, 1.0);
            for (_, b) in PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
