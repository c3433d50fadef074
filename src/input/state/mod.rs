mod actions;
mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingState, InputState};
