//! Stroke style attached to outlined shapes.

use super::color::Color;

/// Width of every outline stroke in pixels.
pub const STROKE_WIDTH: f64 = 1.0;

/// On/off lengths of the dotted pattern.
pub const DASH_PATTERN: [f64; 2] = [5.0, 5.0];

/// Miter limit used for outline joins.
pub const MITER_LIMIT: f64 = 10.0;

/// Color plus solid/dotted mode, captured when a shape is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Dotted (true) or solid (false) outline
    pub dashed: bool,
}

impl StrokeStyle {
    pub fn new(color: Color, dashed: bool) -> Self {
        Self { color, dashed }
    }

    /// Configures the Cairo context for stroking with this style.
    ///
    /// Dotted strokes use butt caps so the gaps stay exactly five units wide;
    /// solid strokes use square caps.
    pub fn apply(&self, ctx: &cairo::Context) {
        self.color.apply_source(ctx);
        ctx.set_line_width(STROKE_WIDTH);
        ctx.set_line_join(cairo::LineJoin::Miter);
        ctx.set_miter_limit(MITER_LIMIT);

        if self.dashed {
            ctx.set_line_cap(cairo::LineCap::Butt);
            ctx.set_dash(&DASH_PATTERN, 0.0);
        } else {
            ctx.set_line_cap(cairo::LineCap::Square);
            ctx.set_dash(&[], 0.0);
        }
    }

    /// Human-readable mode name shown in the status bar.
    pub fn mode_name(&self) -> &'static str {
        mode_name(self.dashed)
    }
}

/// Maps the dash flag to its status-bar label.
pub fn mode_name(dashed: bool) -> &'static str {
    if dashed { "Dotted" } else { "Solid" }
}
