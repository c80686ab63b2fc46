//=========================================================================
// Core Systems
//
// Everything that runs on the logic thread: input tracking, camera, HUD,
// render orchestration and the physics scene contract.
//
// Responsibilities:
// - Receive batched platform input via the crossbeam channel
// - Drive the `VisualDebugger` once per tick at a fixed rate (TPS)
// - Signal the platform when the debugger wants to exit
//
// Notes:
// The logic thread never touches winit. Communication with the platform
// is message passing only, so the debugger state has a single writer.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::info;

//=== Module Declarations =================================================

pub mod camera;
pub mod config;
pub mod debugger;
pub mod hud;
pub mod input;
pub mod platform_bridge;
pub mod render;
pub mod scene;

//=== Re-exports ==========================================================

pub use camera::Camera;
pub use config::DebuggerConfig;
pub use debugger::VisualDebugger;
pub use hud::{Hud, HudScreen};
pub use platform_bridge::TickControl;
pub use render::{RenderMode, RenderSettings, Renderer, TraceRenderer};
pub use scene::{GolfCourse, PhysicsScene};

//=== Internal Imports ====================================================

use platform_bridge::{EventCollector, PlatformEvent};

//=== LogicLoop ===========================================================

/// Fixed-rate loop that feeds platform input to the visual debugger.
pub(crate) struct LogicLoop<P: PhysicsScene, R: Renderer> {
    debugger: VisualDebugger<P, R>,
    collector: EventCollector,
}

impl<P, R> LogicLoop<P, R>
where
    P: PhysicsScene + 'static,
    R: Renderer + 'static,
{
    pub(crate) fn new(debugger: VisualDebugger<P, R>, receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            debugger,
            collector: EventCollector::new(receiver),
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // One logic step: drain platform events, then run a debugger frame.
    //
    pub(crate) fn tick(&mut self) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }
        self.debugger.process_frame(self.collector.batches())
    }

    //--- spawn() ----------------------------------------------------------
    //
    // Runs ticks at `tps` on a new thread until exit, then shuts the
    // debugger down and calls `on_exit` (used to wake the platform).
    //
    pub(crate) fn spawn<F>(mut self, tps: f64, on_exit: F) -> thread::JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            loop {
                let frame_start = Instant::now();

                if self.tick() == TickControl::Exit {
                    info!(target: "debugger", "Logic thread exiting");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            self.debugger.shutdown();
            on_exit();
        })
    }

    #[cfg(test)]
    pub(crate) fn debugger(&self) -> &VisualDebugger<P, R> {
        &self.debugger
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
