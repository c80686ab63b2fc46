//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages and errors exchanged between the platform (main) thread and
// the logic thread running the visual debugger.
//
// ```text
//   platform ──PlatformEvent (crossbeam)──► logic
//   platform ◄──CoreSignal (EventLoopProxy)── logic
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to logic thread.
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    /// Batched input for one rendered frame. Empty batches are not sent.
    Inputs {
        /// Keyboard/mouse button events, order significant.
        discrete: Vec<InputEvent>,
        /// Coalesced cursor motion.
        continuous: Vec<InputEvent>,
    },

    /// The window lost keyboard focus; held keys will never see a release.
    FocusLost,

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== CoreSignal ==========================================================

/// Signals sent from the logic thread back to the platform event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreSignal {
    /// The debugger stopped (Escape or fatal error); close the window.
    Shutdown,
}

//=== PlatformError =======================================================

/// Fatal errors raised while running the debugger.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop terminated with an error.
    EventLoopExecution(winit::error::EventLoopError),

    /// The logic thread panicked.
    LogicThreadPanicked(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::LogicThreadPanicked(msg) => write!(f, "Logic thread panicked: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::LogicThreadPanicked(_) => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
