//! Cairo-based rendering functions for shapes.

use super::canvas::CanvasModel;
use super::color::Color;
use super::shape::{ERASER_SIZE, Shape};
use super::style::StrokeStyle;
use crate::util::{DragBox, Point};

/// Offset that moves integer coordinates onto pixel centers for 1-unit strokes.
const PIXEL_CENTER: f64 = 0.5;

/// Fills the whole surface with the canvas background.
///
/// Should be called before rendering shapes.
pub fn render_background(ctx: &cairo::Context, background: Color) {
    background.apply_source(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous contents
}

/// Repaints the full canvas: background, committed shapes, then the
/// in-progress shape on top.
pub fn render_canvas(ctx: &cairo::Context, canvas: &CanvasModel, background: Color) {
    render_background(ctx, background);
    for shape in canvas.snapshot() {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape type.
/// The context state is saved and restored around each shape so stroke
/// settings never leak between shapes.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    ctx.save().ok();
    match shape {
        Shape::Line { start, end, style } => render_line(ctx, *start, *end, style),
        Shape::Rect { bounds, style } => render_rect(ctx, bounds, style),
        Shape::Oval { bounds, style } => render_oval(ctx, bounds, style),
        Shape::Freehand { points, style } => render_freehand_borrowed(ctx, points, style),
        Shape::EraserMark { at, fill } => render_eraser(ctx, *at, *fill),
    }
    ctx.restore().ok();
}

fn center(value: i32) -> f64 {
    value as f64 + PIXEL_CENTER
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, start: Point, end: Point, style: &StrokeStyle) {
    style.apply(ctx);
    ctx.move_to(center(start.x), center(start.y));
    ctx.line_to(center(end.x), center(end.y));
    let _ = ctx.stroke();
}

/// Render a rectangle outline covering `width + 1` by `height + 1` pixels
fn render_rect(ctx: &cairo::Context, bounds: &DragBox, style: &StrokeStyle) {
    style.apply(ctx);
    ctx.rectangle(
        center(bounds.x),
        center(bounds.y),
        bounds.width as f64,
        bounds.height as f64,
    );
    let _ = ctx.stroke();
}

/// Render an oval inscribed in its bounding box using Cairo's arc with scaling
fn render_oval(ctx: &cairo::Context, bounds: &DragBox, style: &StrokeStyle) {
    // A flat box has no ellipse to scale; draw the segment it collapses to.
    if bounds.width == 0 || bounds.height == 0 {
        render_line(
            ctx,
            Point::new(bounds.x, bounds.y),
            Point::new(
                bounds.x.saturating_add(bounds.width),
                bounds.y.saturating_add(bounds.height),
            ),
            style,
        );
        return;
    }

    let rx = bounds.width as f64 / 2.0;
    let ry = bounds.height as f64 / 2.0;

    style.apply(ctx);
    ctx.save().ok();
    ctx.translate(center(bounds.x) + rx, center(bounds.y) + ry);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    // Stroke after restore so the line width is not scaled with the path.
    let _ = ctx.stroke();
}

/// Render freehand stroke (one continuous polyline through points)
///
/// This function accepts a borrowed slice, avoiding clones while the path is
/// still growing. A single point has no segment and paints nothing.
pub fn render_freehand_borrowed(ctx: &cairo::Context, points: &[Point], style: &StrokeStyle) {
    if points.len() < 2 {
        return;
    }

    style.apply(ctx);

    let first = points[0];
    ctx.move_to(center(first.x), center(first.y));
    for point in &points[1..] {
        ctx.line_to(center(point.x), center(point.y));
    }

    let _ = ctx.stroke();
}

/// Render an eraser mark as an opaque filled square
fn render_eraser(ctx: &cairo::Context, at: Point, fill: Color) {
    fill.apply_source(ctx);
    ctx.rectangle(
        at.x as f64,
        at.y as f64,
        ERASER_SIZE as f64,
        ERASER_SIZE as f64,
    );
    let _ = ctx.fill();
}
