//! Pointer input handling and the editor state machine.
//!
//! This module turns pointer events into scene mutations. It maintains the
//! active tool, the style settings applied to new shapes, and the gesture
//! state machine that distinguishes drawing a new shape from dragging the
//! selected one.

pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use state::{EditorState, Gesture, RenderRequest};
pub use tool::Tool;

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use tool::ParseToolError;
