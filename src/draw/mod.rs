//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types of the paint canvas:
//! - [`Color`]: RGBA color representation with the palette constants
//! - [`StrokeStyle`]: color plus solid/dotted mode attached to outlined shapes
//! - [`Shape`]: line, rectangle, oval, freehand path and eraser mark
//! - [`CanvasModel`]: committed history plus the shape being drawn
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod render;
pub mod shape;
pub mod style;

// Re-export commonly used types at module level
pub use canvas::CanvasModel;
pub use color::Color;
pub use render::render_canvas;
pub use shape::Shape;
pub use style::StrokeStyle;
