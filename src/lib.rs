//! Library exports for the paintbrush canvas.
//!
//! The binary is a thin command-line wrapper; everything it does (config
//! loading, the drawing state machine, rendering and script replay) lives
//! here so tests and other front ends can drive the same code.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod ui;
pub mod util;

pub use config::Config;
pub use input::InputState;
