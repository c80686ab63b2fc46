//=========================================================================
// Input
//=========================================================================
//
// Platform-independent input types and the key-state table.
//
// Architecture:
//   platform (winit) → InputEvent → StateTracker → VisualDebugger
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;
