//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the winit platform layer and the logic thread.
//
// Components:
// - `interface`: messages in both directions and platform errors
// - `event_collector`: logic-side event draining and batching
//
//=========================================================================

//=== Module Declarations =================================================

mod event_collector;
mod interface;

//=== Public API ==========================================================

pub use event_collector::{EventCollector, TickControl};
pub use interface::{CoreSignal, PlatformError, PlatformEvent};
