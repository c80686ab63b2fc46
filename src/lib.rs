//=========================================================================
// Crazy Golf Debugger — Library Root
//
// This crate defines the public API surface of the Crazy Golf visual
// debugger.
//
// Responsibilities:
// - Expose the runtime entry point (`DebuggerBuilder` / `Debugger`)
// - Expose the core contracts (`PhysicsScene`, `Renderer`) so other
//   scenes and drawing backends can be plugged in
// - Keep the winit platform layer hidden from end users
//
// Typical usage:
// ```no_run
// use crazy_golf::DebuggerBuilder;
//
// fn main() {
//     DebuggerBuilder::new().build().run().expect("debugger failed");
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that runs on the logic thread: input tracking,
// camera, HUD, render orchestration and the physics scene contract.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the winit event loop and is not part of
// the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Debugger, DebuggerBuilder};
