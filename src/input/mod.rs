//! Input handling and tool state machine.
//!
//! This module translates collaborator keyboard and pointer events into drawing actions.
//! It owns the current selection (tool, color, solid/dotted) and the Idle/Drawing
//! state machine that creates, extends and commits shapes on the canvas.

pub mod events;
pub mod modifiers;
pub mod selection;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use selection::Selection;
pub use state::{DrawingState, InputState};
pub use tool::Tool;
