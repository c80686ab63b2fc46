//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use crazy_golf::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Debugger, DebuggerBuilder};

// Debugger core
pub use crate::core::{Camera, DebuggerConfig, TickControl, VisualDebugger};

// Input
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

// HUD and rendering
pub use crate::core::hud::{Hud, HudFrame, HudScreen};
pub use crate::core::render::{RenderMode, RenderSettings, Renderer, TraceRenderer};

// Scene
pub use crate::core::scene::{Actor, ActorKind, DebugBuffer, GolfCourse, PhysicsScene, Shape};

// Errors
pub use crate::core::platform_bridge::PlatformError;
